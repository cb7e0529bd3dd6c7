// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the runtime-stride store.
//!
//! Slots are `stride` bytes and compare on their first byte only, so sorts
//! see plenty of ties. The oracle is a `Vec<Vec<u8>>` sorted with the
//! standard (stable) `sort_by`, which the store must match exactly.

#![no_main]

use arbitrary::Arbitrary;
use dynseq::{RawComparator, RawStore};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(u8),
    Insert(u8, u8),
    Pop(u8),
    Remove(u8),
    Reverse,
    Sort,
    ExtendSelf,
}

#[derive(Debug, Arbitrary)]
struct Input {
    stride: u8,
    ops: Vec<Op>,
}

/// Slot whose first byte is `key` and the rest records insertion order.
fn slot(key: u8, stride: usize, serial: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; stride];
    bytes[0] = key;
    for (i, b) in bytes.iter_mut().enumerate().skip(1) {
        *b = (serial >> (8 * ((i - 1) % 8))) as u8;
    }
    bytes
}

fuzz_target!(|input: Input| {
    let stride = (input.stride % 16) as usize + 1;
    let cmp = RawComparator::new(|a: &[u8], b: &[u8]| a[0].cmp(&b[0]));
    let Ok(mut store) = RawStore::create(1, stride, Some(cmp)) else {
        return;
    };
    let mut oracle: Vec<Vec<u8>> = Vec::new();

    for (serial, op) in input.ops.iter().take(128).enumerate() {
        let size = oracle.len();
        match op {
            Op::Append(k) => {
                let s = slot(*k, stride, serial);
                store.append(&s).unwrap();
                oracle.push(s);
            }
            Op::Insert(i, k) => {
                let i = *i as usize;
                let s = slot(*k, stride, serial);
                let ok = store.insert(i, &s).is_ok();
                assert_eq!(ok, i <= size);
                if ok {
                    oracle.insert(i, s);
                }
            }
            Op::Pop(i) => {
                let i = *i as usize;
                let popped = store.pop(i).ok();
                let expected = (i < size).then(|| oracle.remove(i));
                assert_eq!(popped, expected);
            }
            Op::Remove(k) => {
                let probe = slot(*k, stride, 0);
                let removed = store.remove(&probe).unwrap();
                let position = oracle.iter().position(|s| s[0] == *k);
                assert_eq!(removed, position.is_some());
                if let Some(p) = position {
                    oracle.remove(p);
                }
            }
            Op::Reverse => {
                store.reverse();
                oracle.reverse();
            }
            Op::Sort => {
                store.sort().unwrap();
                oracle.sort_by(|a, b| a[0].cmp(&b[0]));
            }
            Op::ExtendSelf if size > 64 => {}
            Op::ExtendSelf => {
                let copy = store.clone();
                store.extend(&copy).unwrap();
                oracle.extend_from_within(..);
            }
        }

        let flat: Vec<u8> = oracle.concat();
        assert_eq!(store.as_bytes(), flat.as_slice());
        assert_eq!(store.len(), oracle.len());
    }
});
