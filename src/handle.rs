// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explicit create/destroy lifecycle.
//!
//! Dropping a [`SequenceStore`] already frees its buffer exactly once. A
//! [`StoreHandle`] is for callers that want to release a store early and keep
//! the handle around: once destroyed, every access fails with
//! [`StoreError::NullHandle`] and further `destroy` calls do nothing.

use crate::comparator::Comparator;
use crate::error::{Result, StoreError};
use crate::store::SequenceStore;

/// A releasable owner of one [`SequenceStore`].
#[derive(Debug)]
pub struct StoreHandle<T: Copy> {
    store: Option<SequenceStore<T>>,
}

impl<T: Copy> StoreHandle<T> {
    pub fn create(capacity: usize, comparator: Option<Comparator<T>>) -> Result<Self> {
        Ok(Self::from_store(SequenceStore::create(capacity, comparator)?))
    }

    pub fn from_store(store: SequenceStore<T>) -> Self {
        Self { store: Some(store) }
    }

    pub fn is_live(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Result<&SequenceStore<T>> {
        self.store.as_ref().ok_or(StoreError::NullHandle)
    }

    pub fn store_mut(&mut self) -> Result<&mut SequenceStore<T>> {
        self.store.as_mut().ok_or(StoreError::NullHandle)
    }

    /// Release the buffer. Idempotent.
    pub fn destroy(&mut self) {
        self.store = None;
    }

    /// Take the store out, leaving the handle released.
    pub fn take(&mut self) -> Result<SequenceStore<T>> {
        self.store.take().ok_or(StoreError::NullHandle)
    }
}

/// Release a store if there is one. `None` is a no-op.
pub fn destroy<T: Copy>(store: Option<SequenceStore<T>>) {
    drop(store);
}
