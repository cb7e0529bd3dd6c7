// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-erased store of fixed-width byte elements.
//!
//! [`RawStore`] is the runtime-stride counterpart of
//! [`SequenceStore`](crate::SequenceStore). Each element is an opaque slot of
//! `stride` bytes, and the comparator sees those bytes as `&[u8]`. Use it when
//! the element width is only known at runtime, e.g. records described by a
//! schema.
//!
//! ```text
//! stride = 3
//! ┌─────────┬─────────┬─────────┬─────────┐
//! │ a0 a1 a2│ b0 b1 b2│ c0 c1 c2│ (free)  │
//! └─────────┴─────────┴─────────┴─────────┘
//!   slot 0    slot 1    slot 2
//! ```
//!
//! Shifts for `insert`, `pop` and `remove` use `copy_within`, which is
//! overlap-safe (memmove semantics).

use std::fmt;
use std::slice::ChunksExact;

use tracing::{debug, trace};

use crate::comparator::Comparator;
use crate::error::{Result, StoreError};
use crate::growth;
use crate::sort::merge_sort_by;
use crate::verify::contracts;

/// Comparator over opaque element bytes.
pub type RawComparator = Comparator<[u8]>;

/// Growable sequence of `stride`-byte elements.
pub struct RawStore {
    bytes: Vec<u8>,
    stride: usize,
    capacity: usize,
    comparator: Option<RawComparator>,
}

impl RawStore {
    /// Create an empty store with `capacity` slots of `stride` bytes.
    ///
    /// A capacity of `0` is rounded up to `1`. A stride of `0` is rejected
    /// with `StrideMismatch`.
    pub fn create(
        capacity: usize,
        stride: usize,
        comparator: Option<RawComparator>,
    ) -> Result<Self> {
        check_stride(stride)?;
        let capacity = growth::initial_capacity(capacity);
        let byte_capacity = growth::byte_len(capacity, stride)?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(byte_capacity)
            .map_err(|_| StoreError::AllocationFailed {
                requested: capacity,
            })?;

        let store = Self {
            bytes,
            stride,
            capacity,
            comparator,
        };
        store.check_invariants();
        Ok(store)
    }

    /// Create an empty store without a comparator.
    pub fn new(capacity: usize, stride: usize) -> Result<Self> {
        Self::create(capacity, stride, None)
    }

    /// Create a store over a copy of `bytes`, which must hold whole slots.
    pub fn from_bytes(bytes: &[u8], stride: usize, comparator: Option<RawComparator>) -> Result<Self> {
        check_stride(stride)?;
        if bytes.len() % stride != 0 {
            return Err(StoreError::StrideMismatch {
                expected: stride,
                actual: bytes.len(),
            });
        }
        let mut store = Self::create(bytes.len() / stride, stride, comparator)?;
        store.bytes.extend_from_slice(bytes);
        store.check_invariants();
        Ok(store)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// All valid element bytes, slot after slot.
    /// Grow (by doubling) until at least `required` slots are allocated.
    pub fn reserve(&mut self, required: usize) -> Result<()> {
        let target = growth::grown_to_fit(self.capacity, required)?;
        self.grow_to(target)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterate over element slots.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.bytes.chunks_exact(self.stride)
    }

    pub fn comparator(&self) -> Option<&RawComparator> {
        self.comparator.as_ref()
    }

    pub fn set_comparator(&mut self, comparator: Option<RawComparator>) -> Option<RawComparator> {
        std::mem::replace(&mut self.comparator, comparator)
    }

    // ========================================================================
    // ELEMENT ACCESS
    // ========================================================================

    pub fn get(&self, index: usize) -> Result<&[u8]> {
        let range = self.slot_range(index)?;
        Ok(&self.bytes[range])
    }

    /// Overwrite slot `index` with `element`.
    pub fn set(&mut self, index: usize, element: &[u8]) -> Result<()> {
        self.check_element(element)?;
        let range = self.slot_range(index)?;
        self.bytes[range].copy_from_slice(element);
        Ok(())
    }

    // ========================================================================
    // POSITIONAL MUTATION
    // ========================================================================

    pub fn append(&mut self, element: &[u8]) -> Result<()> {
        self.check_element(element)?;
        self.reserve_one()?;
        self.bytes.extend_from_slice(element);
        self.check_invariants();
        Ok(())
    }

    /// Insert `element` at `index`. `index == len` appends.
    pub fn insert(&mut self, index: usize, element: &[u8]) -> Result<()> {
        self.check_element(element)?;
        let len = self.len();
        if index > len {
            return Err(StoreError::out_of_bounds(index, len));
        }
        self.reserve_one()?;

        let at = index * self.stride;
        let old_end = self.bytes.len();
        self.bytes.resize(old_end + self.stride, 0);
        self.bytes.copy_within(at..old_end, at + self.stride);
        self.bytes[at..at + self.stride].copy_from_slice(element);
        self.check_invariants();
        Ok(())
    }

    /// Copy the element at `index` out and close the gap.
    pub fn pop(&mut self, index: usize) -> Result<Vec<u8>> {
        let range = self.slot_range(index)?;
        let value = self.bytes[range.clone()].to_vec();
        self.close_gap(range.start);
        Ok(value)
    }

    /// Remove the first slot comparator-equal to `element`.
    pub fn remove(&mut self, element: &[u8]) -> Result<bool> {
        let Some(index) = self.index_of(element)? else {
            return Ok(false);
        };
        self.close_gap(index * self.stride);
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    // ========================================================================
    // BULK OPERATIONS
    // ========================================================================

    /// Append a copy of every slot of `other`. Strides must match.
    pub fn extend(&mut self, other: &RawStore) -> Result<()> {
        if other.stride != self.stride {
            return Err(StoreError::StrideMismatch {
                expected: self.stride,
                actual: other.stride,
            });
        }
        let required = self.len() + other.len();
        self.reserve(required)?;
        self.bytes.extend_from_slice(&other.bytes);
        self.check_invariants();
        Ok(())
    }

    /// Copy slots `[start, end)` into a new store with capacity `2 * (end - start)`.
    pub fn copy_range(&self, start: usize, end: usize) -> Result<RawStore> {
        let len = self.len();
        if end > len {
            return Err(StoreError::out_of_bounds(end, len));
        }
        if start >= end {
            return Err(StoreError::out_of_bounds(start, len));
        }

        let capacity = growth::range_copy_capacity(end - start)?;
        let mut copy = RawStore::create(capacity, self.stride, self.comparator.clone())?;
        copy.bytes
            .extend_from_slice(&self.bytes[start * self.stride..end * self.stride]);
        copy.check_invariants();
        Ok(copy)
    }

    /// Reverse slot order in place.
    pub fn reverse(&mut self) {
        let (len, stride) = (self.len(), self.stride);
        for i in 0..len / 2 {
            let j = len - 1 - i;
            let (head, tail) = self.bytes.split_at_mut(j * stride);
            head[i * stride..(i + 1) * stride].swap_with_slice(&mut tail[..stride]);
        }
    }

    // ========================================================================
    // SEARCH & AGGREGATION
    // ========================================================================

    pub fn count(&self, element: &[u8]) -> Result<usize> {
        let cmp = self.require_comparator()?;
        Ok(self.iter().filter(|slot| cmp.eq(slot, element)).count())
    }

    pub fn contains(&self, element: &[u8]) -> Result<bool> {
        Ok(self.index_of(element)?.is_some())
    }

    pub fn index_of(&self, element: &[u8]) -> Result<Option<usize>> {
        let cmp = self.require_comparator()?;
        Ok(self.iter().position(|slot| cmp.eq(slot, element)))
    }

    // ========================================================================
    // SORT
    // ========================================================================

    /// Stable sort by the store's comparator.
    ///
    /// Sorts a permutation of slot indices, then gathers the slots into a
    /// fresh buffer of the same capacity.
    pub fn sort(&mut self) -> Result<()> {
        let cmp = self.require_comparator()?.clone();
        let (len, stride) = (self.len(), self.stride);
        trace!(size = len, stride, "sorting raw store");
        if len < 2 {
            return Ok(());
        }

        let bytes = &self.bytes;
        let slot = |i: usize| &bytes[i * stride..(i + 1) * stride];

        let mut order: Vec<usize> = (0..len).collect();
        merge_sort_by(&mut order, |&a, &b| cmp.compare(slot(a), slot(b)))?;

        let byte_capacity = growth::byte_len(self.capacity, stride)?;
        let mut sorted = Vec::new();
        sorted
            .try_reserve_exact(byte_capacity)
            .map_err(|_| StoreError::AllocationFailed {
                requested: self.capacity,
            })?;
        for i in order {
            sorted.extend_from_slice(slot(i));
        }
        self.bytes = sorted;

        if cfg!(debug_assertions) {
            let slots: Vec<&[u8]> = self.iter().collect();
            contracts::check_sorted_by(&slots, |a, b| cmp.compare(a, b));
        }
        self.check_invariants();
        Ok(())
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn require_comparator(&self) -> Result<&RawComparator> {
        self.comparator
            .as_ref()
            .ok_or(StoreError::MissingComparator)
    }

    fn check_element(&self, element: &[u8]) -> Result<()> {
        if element.len() != self.stride {
            return Err(StoreError::StrideMismatch {
                expected: self.stride,
                actual: element.len(),
            });
        }
        Ok(())
    }

    fn slot_range(&self, index: usize) -> Result<std::ops::Range<usize>> {
        let len = self.len();
        if index >= len {
            return Err(StoreError::out_of_bounds(index, len));
        }
        let start = index * self.stride;
        Ok(start..start + self.stride)
    }

    /// Shift everything after the slot starting at byte `at` one slot left.
    fn close_gap(&mut self, at: usize) {
        let end = self.bytes.len();
        self.bytes.copy_within(at + self.stride..end, at);
        self.bytes.truncate(end - self.stride);
        self.check_invariants();
    }

    fn reserve_one(&mut self) -> Result<()> {
        if self.len() == self.capacity {
            let target = growth::doubled(self.capacity)?;
            self.grow_to(target)?;
        }
        Ok(())
    }

    fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        let byte_capacity = growth::byte_len(new_capacity, self.stride)?;
        self.bytes
            .try_reserve_exact(byte_capacity - self.bytes.len())
            .map_err(|_| StoreError::AllocationFailed {
                requested: new_capacity,
            })?;

        debug!(
            old_capacity = self.capacity,
            new_capacity,
            stride = self.stride,
            "grew raw store"
        );
        self.capacity = new_capacity;
        Ok(())
    }

    #[inline]
    fn check_invariants(&self) {
        contracts::check_raw_alignment(self.bytes.len(), self.stride);
        contracts::check_size_within_capacity(self.len(), self.capacity);
        contracts::check_backing_reserved(self.bytes.capacity() / self.stride, self.capacity);
    }
}

fn check_stride(stride: usize) -> Result<()> {
    if stride == 0 {
        return Err(StoreError::StrideMismatch {
            expected: 1,
            actual: 0,
        });
    }
    Ok(())
}

impl Clone for RawStore {
    fn clone(&self) -> Self {
        let mut bytes = Vec::with_capacity(self.capacity * self.stride);
        bytes.extend_from_slice(&self.bytes);
        Self {
            bytes,
            stride: self.stride,
            capacity: self.capacity,
            comparator: self.comparator.clone(),
        }
    }
}

impl fmt::Debug for RawStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStore")
            .field("size", &self.len())
            .field("capacity", &self.capacity)
            .field("stride", &self.stride)
            .finish()
    }
}

impl PartialEq for RawStore {
    fn eq(&self, other: &Self) -> bool {
        self.stride == other.stride && self.bytes == other.bytes
    }
}
