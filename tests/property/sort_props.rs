//! Sort ordering, stability and idempotence.

use super::common::{appended, by_key, int_comparator, tagged};
use dynseq::{is_sorted_by, Comparator};
use proptest::prelude::*;

proptest! {
    /// Property: sorted output is non-decreasing under the comparator.
    #[test]
    fn prop_sort_orders(values in prop::collection::vec(any::<i32>(), 0..128)) {
        let mut store = appended(&values, 2, Some(int_comparator()));
        store.sort().unwrap();
        let cmp = int_comparator();
        prop_assert!(is_sorted_by(store.as_slice(), |a, b| cmp.compare(a, b)));

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(store.as_slice(), expected.as_slice());
    }

    /// Property: sort(sort(S)) == sort(S).
    #[test]
    fn prop_sort_idempotent(values in prop::collection::vec(any::<i32>(), 0..128)) {
        let mut store = appended(&values, 2, Some(int_comparator()));
        store.sort().unwrap();
        let once = store.clone();
        store.sort().unwrap();
        prop_assert_eq!(store, once);
    }

    /// Property: comparator-equal elements keep their original relative order.
    #[test]
    fn prop_sort_stable(keys in prop::collection::vec(0u8..8, 0..128)) {
        let items = tagged(&keys);
        let mut store = appended(&items, 2, Some(by_key()));
        store.sort().unwrap();

        for w in store.as_slice().windows(2) {
            prop_assert!(w[0].key <= w[1].key);
            if w[0].key == w[1].key {
                prop_assert!(w[0].tag < w[1].tag, "tie order broken: {:?}", w);
            }
        }

        let mut expected = items.clone();
        expected.sort_by_key(|t| t.key);
        prop_assert_eq!(store.as_slice(), expected.as_slice());
    }

    /// Property: sort leaves size and capacity alone.
    #[test]
    fn prop_sort_keeps_shape(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let mut store = appended(&values, 3, Some(Comparator::natural()));
        let (len, cap) = (store.len(), store.capacity());
        store.sort().unwrap();
        prop_assert_eq!(store.len(), len);
        prop_assert_eq!(store.capacity(), cap);
    }
}
