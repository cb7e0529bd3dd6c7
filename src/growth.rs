// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Capacity policy.
//!
//! Capacity is always counted in slots, never bytes, and only ever grows by
//! doubling:
//!
//! ```text
//! append/insert on a full store      2 → 4 → 8 → 16 ...
//! extend needing `len + other.len`  double from current until it fits
//! copy_range of `n` elements         fresh store with room for 2n
//! ```
//!
//! All arithmetic is checked. Overflow is reported the same way as an
//! allocator refusal, so callers see a single `AllocationFailed` signal.

use crate::error::{Result, StoreError};

/// Smallest capacity a store may have.
pub const MIN_CAPACITY: usize = 1;

/// Capacity used when none is specified.
pub const DEFAULT_CAPACITY: usize = 10;

/// Normalize a requested initial capacity (`0` rounds up to `1`).
#[inline]
pub fn initial_capacity(requested: usize) -> usize {
    requested.max(MIN_CAPACITY)
}

/// Capacity after one doubling step.
#[inline]
pub fn doubled(capacity: usize) -> Result<usize> {
    capacity
        .max(MIN_CAPACITY)
        .checked_mul(2)
        .ok_or(StoreError::AllocationFailed {
            requested: usize::MAX,
        })
}

/// Double `current` until it holds at least `required` slots.
///
/// Never shrinks: if `current` already suffices it is returned unchanged.
pub fn grown_to_fit(current: usize, required: usize) -> Result<usize> {
    let mut capacity = current.max(MIN_CAPACITY);
    while capacity < required {
        capacity = capacity
            .checked_mul(2)
            .ok_or(StoreError::AllocationFailed {
                requested: required,
            })?;
    }
    Ok(capacity)
}

/// Capacity of a store holding a copied range of `len` elements.
#[inline]
pub fn range_copy_capacity(len: usize) -> Result<usize> {
    doubled(initial_capacity(len))
}

/// Total byte count for `slots` elements of `stride` bytes.
#[inline]
pub fn byte_len(slots: usize, stride: usize) -> Result<usize> {
    slots
        .checked_mul(stride)
        .ok_or(StoreError::AllocationFailed { requested: slots })
}
