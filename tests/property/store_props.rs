//! Size, capacity and positional-mutation properties.

use super::common::{appended, assert_doubling_of, assert_store_well_formed, int_comparator};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn values_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..64)
}

fn non_empty_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 1..64)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: each append adds exactly one element and size never exceeds capacity.
    #[test]
    fn prop_append_size_monotonic(values in values_strategy(), initial in 0usize..8) {
        let mut store = appended(&[], initial, Some(int_comparator()));
        for (i, &v) in values.iter().enumerate() {
            let before = store.len();
            store.append(v).unwrap();
            prop_assert_eq!(store.len(), before + 1);
            prop_assert_eq!(store.len(), i + 1);
            prop_assert!(store.len() <= store.capacity());
        }
        assert_doubling_of(store.capacity(), initial);
        prop_assert_eq!(store.as_slice(), values.as_slice());
    }

    /// Property: inserting x at i then removing the first x restores the sequence
    /// when x does not occur before i.
    #[test]
    fn prop_insert_remove_round_trip(values in non_empty_values(), x in 50i32..60, i in any::<prop::sample::Index>()) {
        let index = i.index(values.len() + 1);
        let mut store = appended(&values, 2, Some(int_comparator()));
        store.insert(index, x).unwrap();
        prop_assert_eq!(*store.get(index).unwrap(), x);
        prop_assert!(store.remove(&x).unwrap());
        prop_assert_eq!(store.as_slice(), values.as_slice());
    }

    /// Property: pop(i) returns get(i) and shifts the tail left in order.
    #[test]
    fn prop_pop_consistency(values in non_empty_values(), i in any::<prop::sample::Index>()) {
        let index = i.index(values.len());
        let mut store = appended(&values, 1, None);
        let expected = *store.get(index).unwrap();
        let popped = store.pop(index).unwrap();
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(store.len(), values.len() - 1);
        prop_assert_eq!(&store.as_slice()[..index], &values[..index]);
        prop_assert_eq!(&store.as_slice()[index..], &values[index + 1..]);
    }

    /// Property: extend adds lengths and leaves the prefix and the source alone.
    #[test]
    fn prop_extend_length(a in values_strategy(), b in values_strategy()) {
        let mut left = appended(&a, 2, None);
        let right = appended(&b, 2, None);
        let initial_capacity = left.capacity();
        left.extend(&right).unwrap();
        prop_assert_eq!(left.len(), a.len() + b.len());
        prop_assert_eq!(&left.as_slice()[..a.len()], a.as_slice());
        prop_assert_eq!(&left.as_slice()[a.len()..], b.as_slice());
        prop_assert_eq!(right.as_slice(), b.as_slice());
        assert_doubling_of(left.capacity(), initial_capacity);
        assert_store_well_formed(&left);
    }

    /// Property: reverse is its own inverse.
    #[test]
    fn prop_reverse_involution(values in values_strategy()) {
        let mut store = appended(&values, 4, None);
        store.reverse();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(store.as_slice(), expected.as_slice());
        store.reverse();
        prop_assert_eq!(store.as_slice(), values.as_slice());
    }

    /// Property: get/set/pop at or past size never succeed.
    #[test]
    fn prop_bounds_rejected(values in values_strategy(), past in 0usize..100) {
        let mut store = appended(&values, 2, None);
        let index = values.len() + past;
        prop_assert!(store.get(index).is_err());
        prop_assert!(store.set(index, 0).is_err());
        prop_assert!(store.pop(index).is_err());
        prop_assert!(store.insert(index + 1, 0).is_err());
        prop_assert_eq!(store.as_slice(), values.as_slice());
    }

    /// Property: copy_range copies exactly [start, end) with capacity 2 * len.
    #[test]
    fn prop_copy_range(values in non_empty_values(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let store = appended(&values, 2, Some(int_comparator()));
        let (x, y) = (a.index(values.len() + 1), b.index(values.len() + 1));
        let (start, end) = (x.min(y), x.max(y));
        let copy = store.copy_range(start, end);
        if start == end {
            prop_assert!(copy.is_err());
        } else {
            let copy = copy.unwrap();
            prop_assert_eq!(copy.as_slice(), &values[start..end]);
            prop_assert_eq!(copy.capacity(), 2 * (end - start));
        }
    }

    /// Property: count/contains/index_of agree with a linear scan.
    #[test]
    fn prop_search_matches_scan(values in non_empty_values(), probe in -50i32..50) {
        let store = appended(&values, 2, Some(int_comparator()));
        let expected_count = values.iter().filter(|&&v| v == probe).count();
        prop_assert_eq!(store.count(&probe).unwrap(), expected_count);
        prop_assert_eq!(store.contains(&probe).unwrap(), expected_count > 0);
        prop_assert_eq!(store.index_of(&probe).unwrap(), values.iter().position(|&v| v == probe));
    }
}
