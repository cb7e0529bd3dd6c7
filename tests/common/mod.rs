//! Shared test utilities and fixtures.

#![allow(dead_code)]

use dynseq::{Comparator, SequenceStore};

// Re-export canonical fixtures from dynseq::testing
pub use dynseq::testing::{int_comparator, int_store, people_store, person_by_id, Person};

/// Record with a sort key and its original position, for stability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: u8,
    pub tag: usize,
}

/// Compares on `key` only, so equal keys are ties.
pub fn by_key() -> Comparator<Tagged> {
    Comparator::by_key(|t: &Tagged| t.key)
}

pub fn tagged(keys: &[u8]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

/// Store of `values` built by repeated `append` from capacity `capacity`.
pub fn appended<T: Copy>(values: &[T], capacity: usize, cmp: Option<Comparator<T>>) -> SequenceStore<T> {
    let mut store = SequenceStore::create(capacity, cmp).expect("create");
    for &v in values {
        store.append(v).expect("append");
    }
    store
}

/// Assert the structural invariants that every public operation must keep.
pub fn assert_store_well_formed<T: Copy>(store: &SequenceStore<T>) {
    assert!(store.capacity() >= 1, "capacity must be >= 1");
    assert!(
        store.len() <= store.capacity(),
        "size {} > capacity {}",
        store.len(),
        store.capacity()
    );
    assert_eq!(store.as_slice().len(), store.len());
    assert_eq!(store.stride(), std::mem::size_of::<T>());
}

/// Capacity is the initial capacity doubled some number of times.
pub fn assert_doubling_of(capacity: usize, initial: usize) {
    let mut c = initial.max(1);
    while c < capacity {
        c *= 2;
    }
    assert_eq!(c, capacity, "capacity {} is not a doubling of {}", capacity, initial);
}
