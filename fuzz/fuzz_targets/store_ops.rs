// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for typed store operation sequences.
//!
//! Applies arbitrary operations to a `SequenceStore<i16>` and a `Vec<i16>`
//! side by side. The store must never panic, must report `OutOfBounds`
//! exactly when the oracle index is invalid, and must hold the same elements
//! as the oracle after every step.

#![no_main]

use arbitrary::Arbitrary;
use dynseq::{Comparator, SequenceStore};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(i16),
    Insert(u8, i16),
    Set(u8, i16),
    Get(u8),
    Pop(u8),
    Remove(i16),
    Count(i16),
    CopyRange(u8, u8),
    Clear,
    Reverse,
    Sort,
    Extend(Vec<i16>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial_capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let cmp = Comparator::<i16>::natural();
    let Ok(mut store) = SequenceStore::with_comparator(input.initial_capacity as usize, cmp) else {
        return;
    };
    let mut oracle: Vec<i16> = Vec::new();

    for op in input.ops.iter().take(256) {
        let size = oracle.len();
        match op {
            Op::Append(v) => {
                store.append(*v).unwrap();
                oracle.push(*v);
            }
            Op::Insert(i, v) => {
                let i = *i as usize;
                let ok = store.insert(i, *v).is_ok();
                assert_eq!(ok, i <= size);
                if ok {
                    oracle.insert(i, *v);
                }
            }
            Op::Set(i, v) => {
                let i = *i as usize;
                let ok = store.set(i, *v).is_ok();
                assert_eq!(ok, i < size);
                if ok {
                    oracle[i] = *v;
                }
            }
            Op::Get(i) => {
                let i = *i as usize;
                assert_eq!(store.get(i).ok(), oracle.get(i));
            }
            Op::Pop(i) => {
                let i = *i as usize;
                let popped = store.pop(i).ok();
                let expected = (i < size).then(|| oracle.remove(i));
                assert_eq!(popped, expected);
            }
            Op::Remove(v) => {
                let removed = store.remove(v).unwrap();
                let position = oracle.iter().position(|x| x == v);
                assert_eq!(removed, position.is_some());
                if let Some(p) = position {
                    oracle.remove(p);
                }
            }
            Op::Count(v) => {
                let expected = oracle.iter().filter(|x| *x == v).count();
                assert_eq!(store.count(v).unwrap(), expected);
            }
            Op::CopyRange(a, b) => {
                let (start, end) = (*a as usize, *b as usize);
                match store.copy_range(start, end) {
                    Ok(copy) => {
                        assert!(start < end && end <= size);
                        assert_eq!(copy.as_slice(), &oracle[start..end]);
                        assert_eq!(copy.capacity(), 2 * (end - start));
                    }
                    Err(_) => assert!(start >= end || end > size),
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
            Op::Extend(values) => {
                store.extend_from_slice(values).unwrap();
                oracle.extend_from_slice(values);
            }
        }

        assert_eq!(store.as_slice(), oracle.as_slice());
        assert!(store.len() <= store.capacity());
    }
});
