// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The growable sequence store.
//!
//! # Layout
//!
//! ```text
//!            size = 3            capacity = 4
//! ┌────────┬────────┬────────┬────────┐
//! │ item 0 │ item 1 │ item 2 │ (free) │      Vec<T>: len == size,
//! └────────┴────────┴────────┴────────┘      allocation >= capacity
//!  ◀── valid, index-addressable ──▶
//! ```
//!
//! The store tracks its own logical `capacity` and grows it strictly by
//! doubling (see [`crate::growth`]). The backing `Vec` is always reserved to at
//! least that many slots, so the amortized O(1) append contract and the
//! observable capacity sequence `2 → 4 → 8 → 16` hold no matter what growth
//! factor the allocator would have picked on its own.
//!
//! # Comparator
//!
//! Index-based operations work without a comparator. `sort`, `count`,
//! `contains`, `index_of` and `remove` need one and fail with
//! [`StoreError::MissingComparator`] otherwise.

use std::fmt;
use std::mem;

use serde::ser::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::comparator::Comparator;
use crate::error::{Result, StoreError};
use crate::growth;
use crate::sort::merge_sort_by;
use crate::verify::contracts;

/// Growable sequence of `Copy` elements with an optional injected comparator.
pub struct SequenceStore<T: Copy> {
    items: Vec<T>,
    capacity: usize,
    comparator: Option<Comparator<T>>,
}

impl<T: Copy> SequenceStore<T> {
    /// Create an empty store with room for `capacity` elements.
    ///
    /// A capacity of `0` is rounded up to `1`.
    pub fn create(capacity: usize, comparator: Option<Comparator<T>>) -> Result<Self> {
        let capacity = growth::initial_capacity(capacity);
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| StoreError::AllocationFailed {
                requested: capacity,
            })?;

        let store = Self {
            items,
            capacity,
            comparator,
        };
        store.check_invariants();
        Ok(store)
    }

    /// Create a store without a comparator.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::create(capacity, None)
    }

    /// Same as [`SequenceStore::new`], named after `Vec::with_capacity`.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::create(capacity, None)
    }

    /// Create a store ordered by `comparator`.
    pub fn with_comparator(capacity: usize, comparator: Comparator<T>) -> Result<Self> {
        Self::create(capacity, Some(comparator))
    }

    /// Create a store holding a copy of `items`.
    pub fn from_slice(items: &[T], comparator: Option<Comparator<T>>) -> Result<Self> {
        let mut store = Self::create(items.len(), comparator)?;
        store.items.extend_from_slice(items);
        store.check_invariants();
        Ok(store)
    }

    // ========================================================================
    // SIZE & CAPACITY
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Byte width of one element.
    #[inline]
    pub fn stride(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Grow (by doubling) until at least `required` slots are allocated.
    pub fn reserve(&mut self, required: usize) -> Result<()> {
        let target = growth::grown_to_fit(self.capacity, required)?;
        self.grow_to(target)
    }

    // ========================================================================
    // COMPARATOR
    // ========================================================================

    pub fn comparator(&self) -> Option<&Comparator<T>> {
        self.comparator.as_ref()
    }

    /// Replace the comparator, returning the previous one.
    pub fn set_comparator(&mut self, comparator: Option<Comparator<T>>) -> Option<Comparator<T>> {
        mem::replace(&mut self.comparator, comparator)
    }

    fn require_comparator(&self) -> Result<&Comparator<T>> {
        self.comparator
            .as_ref()
            .ok_or(StoreError::MissingComparator)
    }

    // ========================================================================
    // ELEMENT ACCESS
    // ========================================================================

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| StoreError::out_of_bounds(index, self.items.len()))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| StoreError::out_of_bounds(index, size))
    }

    /// Overwrite the element at `index`. Never changes size or capacity.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// The valid elements `[0, len)`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    // ========================================================================
    // POSITIONAL MUTATION
    // ========================================================================

    /// Append `value` at the end, doubling capacity if the store is full.
    pub fn append(&mut self, value: T) -> Result<()> {
        self.reserve_one()?;
        self.items.push(value);
        self.check_invariants();
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends; `index > len` fails with `OutOfBounds`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.items.len() {
            return Err(StoreError::out_of_bounds(index, self.items.len()));
        }
        self.reserve_one()?;
        self.items.insert(index, value);
        self.check_invariants();
        Ok(())
    }

    /// Remove the first element comparator-equal to `value`.
    ///
    /// Returns `Ok(false)` if nothing matched; the store is unchanged then.
    pub fn remove(&mut self, value: &T) -> Result<bool> {
        let Some(index) = self.index_of(value)? else {
            return Ok(false);
        };
        self.items.remove(index);
        self.check_invariants();
        Ok(true)
    }

    /// Take the element at `index` out of the store, shifting the rest left.
    pub fn pop(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(StoreError::out_of_bounds(index, self.items.len()));
        }
        let value = self.items.remove(index);
        self.check_invariants();
        Ok(value)
    }

    /// Remove and return the last element, if any.
    pub fn pop_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Drop all elements. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ========================================================================
    // BULK OPERATIONS
    // ========================================================================

    /// Append a copy of every element of `other`. `other` is not modified.
    pub fn extend(&mut self, other: &Self) -> Result<()> {
        self.extend_from_slice(other.as_slice())
    }

    /// Append a copy of `values`, growing by doubling from the current
    /// capacity until everything fits.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()> {
        let required = self
            .items
            .len()
            .checked_add(values.len())
            .ok_or(StoreError::AllocationFailed {
                requested: usize::MAX,
            })?;
        self.reserve(required)?;
        self.items.extend_from_slice(values);
        self.check_invariants();
        Ok(())
    }

    /// Copy `[start, end)` into a new, independent store.
    ///
    /// The copy has capacity `2 * (end - start)` and shares this store's
    /// comparator. Fails with `OutOfBounds` unless `start < end <= len`.
    pub fn copy_range(&self, start: usize, end: usize) -> Result<Self> {
        let size = self.items.len();
        if end > size {
            return Err(StoreError::out_of_bounds(end, size));
        }
        if start >= end {
            return Err(StoreError::out_of_bounds(start, size));
        }

        let capacity = growth::range_copy_capacity(end - start)?;
        let mut copy = Self::create(capacity, self.comparator.clone())?;
        copy.items.extend_from_slice(&self.items[start..end]);
        copy.check_invariants();
        Ok(copy)
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        let n = self.items.len();
        for i in 0..n / 2 {
            self.items.swap(i, n - 1 - i);
        }
    }

    // ========================================================================
    // SEARCH & AGGREGATION
    // ========================================================================

    /// Number of elements comparator-equal to `value`.
    pub fn count(&self, value: &T) -> Result<usize> {
        let cmp = self.require_comparator()?;
        Ok(self.items.iter().filter(|item| cmp.eq(item, value)).count())
    }

    pub fn contains(&self, value: &T) -> Result<bool> {
        Ok(self.index_of(value)?.is_some())
    }

    /// Index of the first element comparator-equal to `value`.
    pub fn index_of(&self, value: &T) -> Result<Option<usize>> {
        let cmp = self.require_comparator()?;
        Ok(self.items.iter().position(|item| cmp.eq(item, value)))
    }

    // ========================================================================
    // SORT
    // ========================================================================

    /// Stable in-place merge sort by the store's comparator.
    pub fn sort(&mut self) -> Result<()> {
        let cmp = self
            .comparator
            .clone()
            .ok_or(StoreError::MissingComparator)?;
        trace!(size = self.items.len(), "sorting sequence store");

        merge_sort_by(&mut self.items, |a, b| cmp.compare(a, b))?;

        contracts::check_sorted_by(&self.items, |a, b| cmp.compare(a, b));
        self.check_invariants();
        Ok(())
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn reserve_one(&mut self) -> Result<()> {
        if self.items.len() == self.capacity {
            let target = growth::doubled(self.capacity)?;
            self.grow_to(target)?;
        }
        Ok(())
    }

    /// Reallocate to `new_capacity` slots. The old buffer stays in place
    /// until the new reservation succeeds.
    fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        let additional = new_capacity - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| StoreError::AllocationFailed {
                requested: new_capacity,
            })?;

        debug!(
            old_capacity = self.capacity,
            new_capacity, "grew sequence store"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    #[inline]
    fn check_invariants(&self) {
        contracts::check_size_within_capacity(self.items.len(), self.capacity);
        contracts::check_backing_reserved(self.items.capacity(), self.capacity);
    }
}

impl<T: Copy> Clone for SequenceStore<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for SequenceStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceStore")
            .field("size", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

/// Stores compare equal when their valid elements are equal.
impl<T: Copy + PartialEq> PartialEq for SequenceStore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Copy + Serialize> Serialize for SequenceStore<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'a, T: Copy> IntoIterator for &'a SequenceStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
