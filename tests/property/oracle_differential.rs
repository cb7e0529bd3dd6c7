//! Differential testing against a `Vec` oracle.
//!
//! Random operation sequences are applied both to a store and to a plain
//! `Vec`, whose behavior is obviously correct. After every step the two must
//! hold the same elements, and the store must agree on every error.

use super::common::{assert_store_well_formed, int_comparator};
use dynseq::{SequenceStore, StoreError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append(i32),
    Insert(usize, i32),
    Set(usize, i32),
    Pop(usize),
    Remove(i32),
    Clear,
    Reverse,
    Sort,
    ExtendSelf,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-20i32..20).prop_map(Op::Append),
        2 => (0usize..40, -20i32..20).prop_map(|(i, v)| Op::Insert(i, v)),
        1 => (0usize..40, -20i32..20).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0usize..40).prop_map(Op::Pop),
        1 => (-20i32..20).prop_map(Op::Remove),
        1 => Just(Op::Clear),
        1 => Just(Op::Reverse),
        1 => Just(Op::Sort),
        1 => Just(Op::ExtendSelf),
    ]
}

fn apply(store: &mut SequenceStore<i32>, oracle: &mut Vec<i32>, op: &Op) -> Result<(), TestCaseError> {
    let size = oracle.len();
    match *op {
        Op::Append(v) => {
            store.append(v).unwrap();
            oracle.push(v);
        }
        Op::Insert(i, v) => {
            let result = store.insert(i, v);
            if i <= size {
                prop_assert!(result.is_ok());
                oracle.insert(i, v);
            } else {
                prop_assert_eq!(result, Err(StoreError::OutOfBounds { index: i, size }));
            }
        }
        Op::Set(i, v) => {
            let result = store.set(i, v);
            if i < size {
                prop_assert!(result.is_ok());
                oracle[i] = v;
            } else {
                prop_assert!(result.is_err());
            }
        }
        Op::Pop(i) => {
            let result = store.pop(i);
            if i < size {
                prop_assert_eq!(result, Ok(oracle.remove(i)));
            } else {
                prop_assert!(result.is_err());
            }
        }
        Op::Remove(v) => {
            let removed = store.remove(&v).unwrap();
            let position = oracle.iter().position(|&x| x == v);
            prop_assert_eq!(removed, position.is_some());
            if let Some(p) = position {
                oracle.remove(p);
            }
        }
        Op::Clear => {
            store.clear();
            oracle.clear();
        }
        Op::Reverse => {
            store.reverse();
            oracle.reverse();
        }
        Op::Sort => {
            store.sort().unwrap();
            oracle.sort();
        }
        // Doubling on every step would blow up long sequences.
        Op::ExtendSelf if size > 256 => {}
        Op::ExtendSelf => {
            let copy = store.clone();
            store.extend(&copy).unwrap();
            let copy = oracle.clone();
            oracle.extend(copy);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: any operation sequence leaves store and oracle identical.
    #[test]
    fn prop_matches_vec_oracle(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = SequenceStore::with_comparator(2, int_comparator()).unwrap();
        let mut oracle: Vec<i32> = Vec::new();
        let mut max_capacity = store.capacity();

        for op in &ops {
            apply(&mut store, &mut oracle, op)?;
            prop_assert_eq!(store.as_slice(), oracle.as_slice(), "after {:?}", op);
            prop_assert!(store.capacity() >= max_capacity, "capacity shrank after {:?}", op);
            max_capacity = store.capacity();
            assert_store_well_formed(&store);
        }
    }
}
