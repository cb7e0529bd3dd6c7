// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction parameters that can be loaded from JSON.
//!
//! ```json
//! { "initialCapacity": 16 }
//! ```

use serde::{Deserialize, Serialize};

use crate::comparator::Comparator;
use crate::error::Result;
use crate::growth::{self, DEFAULT_CAPACITY};
use crate::raw::{RawComparator, RawStore};
use crate::store::SequenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Slots allocated up front. `0` is treated as `1`.
    #[serde(default = "default_capacity")]
    pub initial_capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl StoreConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Capacity a store built from this config will report.
    pub fn effective_capacity(&self) -> usize {
        growth::initial_capacity(self.initial_capacity)
    }

    /// Build a typed store.
    pub fn build<T: Copy>(&self, comparator: Option<Comparator<T>>) -> Result<SequenceStore<T>> {
        SequenceStore::create(self.initial_capacity, comparator)
    }

    /// Build a raw store of `stride`-byte slots.
    pub fn build_raw(&self, stride: usize, comparator: Option<RawComparator>) -> Result<RawStore> {
        RawStore::create(self.initial_capacity, stride, comparator)
    }
}
