// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy shared by every store in the crate.
//!
//! Every fallible operation hands its error straight back to the caller. No
//! operation retries internally, and a failed relocation leaves `len` and
//! `capacity` describing the buffer that is actually in hand.
//!
//! A lookup that finds nothing is not an error: `index_of` returns `Ok(None)`
//! and `remove` returns `Ok(false)`.

use thiserror::Error;

/// Errors reported by [`SequenceStore`](crate::SequenceStore),
/// [`RawStore`](crate::RawStore) and [`StoreHandle`](crate::StoreHandle).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The handle was already released with `destroy`.
    #[error("store handle has been released")]
    NullHandle,

    /// Index argument outside `[0, size)` (or `[0, size]` for insert).
    #[error("index {index} out of bounds for size {size}")]
    OutOfBounds {
        /// The rejected index (or range end for `copy_range`).
        index: usize,
        /// Logical size of the store at the time of the call.
        size: usize,
    },

    /// The buffer could not grow to the requested number of slots.
    #[error("failed to allocate {requested} slots")]
    AllocationFailed {
        /// Slot count that was requested.
        requested: usize,
    },

    /// Two stores (or a store and an element) disagree on element width.
    #[error("stride mismatch: expected {expected} bytes, got {actual}")]
    StrideMismatch {
        /// Stride of the receiving store.
        expected: usize,
        /// Stride that was supplied.
        actual: usize,
    },

    /// A comparator-driven operation ran on a store without a comparator.
    #[error("store has no comparator configured")]
    MissingComparator,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub(crate) fn out_of_bounds(index: usize, size: usize) -> Self {
        StoreError::OutOfBounds { index, size }
    }

    /// True for errors caused by the caller's index arguments.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, StoreError::OutOfBounds { .. })
    }
}
