// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stable top-down merge sort.
//!
//! # Algorithm
//!
//! ```text
//! [5, 2, 4, 2', 1]
//!        │ split at the midpoint until runs hold one element
//!        ▼
//! [5, 2, 4] [2', 1]  →  [2, 4, 5] [1, 2']
//!        │ merge: take the left head while left <= right
//!        ▼
//! [1, 2, 2', 4, 5]      (2 stays before 2': ties keep left-run order)
//! ```
//!
//! One scratch buffer the size of the input is allocated up front and reused
//! by every merge, so a sort performs exactly one auxiliary allocation.
//!
//! # Complexity
//!
//! - Time: O(n log n) comparisons
//! - Space: O(n) auxiliary, O(log n) stack

use std::cmp::Ordering;

use crate::error::{Result, StoreError};

/// Sort `items` stably with `compare`.
///
/// Fails with `AllocationFailed` if the scratch buffer cannot be reserved, in
/// which case `items` is left untouched.
pub fn merge_sort_by<T, F>(items: &mut [T], mut compare: F) -> Result<()>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n < 2 {
        return Ok(());
    }

    let mut scratch: Vec<T> = Vec::new();
    scratch
        .try_reserve_exact(n)
        .map_err(|_| StoreError::AllocationFailed { requested: n })?;
    scratch.extend_from_slice(items);

    sort_range(items, &mut scratch, 0, n, &mut compare);
    Ok(())
}

/// Sort the half-open range `[lo, hi)`.
fn sort_range<T, F>(items: &mut [T], scratch: &mut [T], lo: usize, hi: usize, compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if hi - lo < 2 {
        return;
    }
    // Left run takes the extra element on odd lengths.
    let mid = lo + (hi - lo + 1) / 2;
    sort_range(items, scratch, lo, mid, compare);
    sort_range(items, scratch, mid, hi, compare);
    merge(items, scratch, lo, mid, hi, compare);
}

/// Merge the sorted runs `[lo, mid)` and `[mid, hi)`.
fn merge<T, F>(items: &mut [T], scratch: &mut [T], lo: usize, mid: usize, hi: usize, compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    // Already ordered across the seam: nothing to do.
    if compare(&items[mid - 1], &items[mid]) != Ordering::Greater {
        return;
    }

    let (mut left, mut right) = (lo, mid);
    for slot in &mut scratch[lo..hi] {
        let take_left =
            right >= hi || (left < mid && compare(&items[left], &items[right]) != Ordering::Greater);
        if take_left {
            *slot = items[left];
            left += 1;
        } else {
            *slot = items[right];
            right += 1;
        }
    }

    items[lo..hi].copy_from_slice(&scratch[lo..hi]);
}

/// True if `items` is non-decreasing under `compare`.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}
