// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the sequence stores.
//!
//! These checks are:
//!
//! 1. **Zero-cost in release builds** (use `debug_assert!`)
//! 2. **Run after every mutation** in debug builds
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                  |
//! |------------------------------|--------------------------------------------|
//! | `check_capacity_positive`    | `capacity >= 1` after construction         |
//! | `check_size_within_capacity` | `0 <= size <= capacity`                    |
//! | `check_backing_reserved`     | allocation holds at least `capacity` slots |
//! | `check_sorted_by`            | `compare(s[i], s[i+1]) <= 0` after sort    |
//! | `check_raw_alignment`        | byte buffer is a whole number of slots     |
//!
//! # Usage
//!
//! ```ignore
//! use dynseq::verify::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_size_within_capacity(store.len(), store.capacity());
//!
//! // In release builds, this is a no-op
//! ```

use std::cmp::Ordering;

// ============================================================================
// CAPACITY CONTRACTS
// ============================================================================

/// Check that a store never reports zero capacity.
///
/// # Panics (debug builds only)
/// Panics if `capacity == 0`.
#[inline]
pub fn check_capacity_positive(capacity: usize) {
    debug_assert!(
        capacity >= 1,
        "Contract violation: capacity must be >= 1, got {}",
        capacity
    );
}

/// Check that the logical size fits the logical capacity.
///
/// # Panics (debug builds only)
/// Panics if `size > capacity`.
#[inline]
pub fn check_size_within_capacity(size: usize, capacity: usize) {
    check_capacity_positive(capacity);
    debug_assert!(
        size <= capacity,
        "Contract violation: size {} > capacity {}",
        size,
        capacity
    );
}

/// Check that the backing allocation really holds the logical capacity.
///
/// # Panics (debug builds only)
/// Panics if `allocated < capacity`.
#[inline]
pub fn check_backing_reserved(allocated: usize, capacity: usize) {
    debug_assert!(
        allocated >= capacity,
        "Contract violation: backing buffer holds {} slots, capacity claims {}",
        allocated,
        capacity
    );
}

// ============================================================================
// ORDERING CONTRACTS
// ============================================================================

/// Check that a slice is non-decreasing under `compare`.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair that is out of order.
#[inline]
pub fn check_sorted_by<T, F>(items: &[T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if cfg!(debug_assertions) {
        for i in 1..items.len() {
            debug_assert!(
                compare(&items[i - 1], &items[i]) != Ordering::Greater,
                "Contract violation: Sorted - element {} orders after element {}",
                i - 1,
                i
            );
        }
    }
}

// ============================================================================
// RAW STORE CONTRACTS
// ============================================================================

/// Check that a byte buffer splits into whole slots.
///
/// # Panics (debug builds only)
/// Panics if `stride == 0` or `bytes % stride != 0`.
#[inline]
pub fn check_raw_alignment(bytes: usize, stride: usize) {
    debug_assert!(stride > 0, "Contract violation: stride must be > 0");
    if stride > 0 {
        debug_assert_eq!(
            bytes % stride,
            0,
            "Contract violation: {} bytes is not a whole number of {}-byte slots",
            bytes,
            stride
        );
    }
}
