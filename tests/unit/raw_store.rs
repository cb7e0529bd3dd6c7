//! Opaque byte-slot store.

use dynseq::{RawComparator, RawStore, StoreConfig, StoreError};

fn le(v: i32) -> [u8; 4] {
    v.to_le_bytes()
}

fn decode(slot: &[u8]) -> i32 {
    i32::from_le_bytes([slot[0], slot[1], slot[2], slot[3]])
}

fn int_raw(capacity: usize) -> RawStore {
    let cmp = RawComparator::new(|a: &[u8], b: &[u8]| decode(a).cmp(&decode(b)));
    RawStore::create(capacity, 4, Some(cmp)).unwrap()
}

fn values(store: &RawStore) -> Vec<i32> {
    store.iter().map(decode).collect()
}

#[test]
fn raw_integer_scenario() {
    let mut store = int_raw(2);
    for i in 0..10 {
        store.append(&le(i)).unwrap();
    }
    assert_eq!(store.capacity(), 16);
    assert_eq!(decode(store.get(9).unwrap()), 9);

    store.insert(0, &le(99)).unwrap();
    assert_eq!(decode(store.get(0).unwrap()), 99);
    assert_eq!(decode(store.get(1).unwrap()), 0);

    assert_eq!(decode(&store.pop(0).unwrap()), 99);
    assert_eq!(store.len(), 10);
}

#[test]
fn raw_set_and_bounds() {
    let mut store = int_raw(4);
    store.append(&le(1)).unwrap();
    store.set(0, &le(5)).unwrap();
    assert_eq!(values(&store), vec![5]);
    assert_eq!(
        store.set(1, &le(0)),
        Err(StoreError::OutOfBounds { index: 1, size: 1 })
    );
    assert!(matches!(
        store.set(0, &[0u8; 3]),
        Err(StoreError::StrideMismatch {
            expected: 4,
            actual: 3
        })
    ));
}

#[test]
fn raw_sort_reverse_roundtrip() {
    let mut store = int_raw(1);
    for v in [5, -3, 12, 0, -3] {
        store.append(&le(v)).unwrap();
    }
    store.sort().unwrap();
    assert_eq!(values(&store), vec![-3, -3, 0, 5, 12]);
    store.reverse();
    store.reverse();
    assert_eq!(values(&store), vec![-3, -3, 0, 5, 12]);
}

#[test]
fn raw_from_config() {
    let config = StoreConfig::with_capacity(3);
    let store = config.build_raw(16, None).unwrap();
    assert_eq!(store.capacity(), 3);
    assert_eq!(store.stride(), 16);
    assert!(store.is_empty());
}

#[test]
fn raw_from_bytes_rejects_partial_slot() {
    assert!(matches!(
        RawStore::from_bytes(&[1, 2, 3], 2, None),
        Err(StoreError::StrideMismatch { .. })
    ));
}
