// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sample records and comparators shared by tests, benches and the demo.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use serde::{Deserialize, Serialize};

use crate::comparator::Comparator;
use crate::error::Result;
use crate::store::SequenceStore;

/// A small fixed-size record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub age: i32,
    pub height: f32,
}

impl Person {
    pub fn new(id: i32, age: i32, height: f32) -> Self {
        Self { id, age, height }
    }
}

/// Integer comparator following the negative/zero/positive contract.
pub fn int_comparator() -> Comparator<i32> {
    Comparator::three_way(|a: &i32, b: &i32| i32::from(a > b) - i32::from(a < b))
}

/// Orders people by `id` only.
pub fn person_by_id() -> Comparator<Person> {
    Comparator::by_key(|p: &Person| p.id)
}

/// The five people used by the demo program.
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new(69, 21, 1.76),
        Person::new(0, 18, 1.68),
        Person::new(1, 20, 1.72),
        Person::new(999, 100, 1.22),
        Person::new(2, 30, 1.80),
    ]
}

/// Integer store with capacity 2 holding `values`.
pub fn int_store(values: &[i32]) -> Result<SequenceStore<i32>> {
    let mut store = SequenceStore::with_comparator(2, int_comparator())?;
    for &v in values {
        store.append(v)?;
    }
    Ok(store)
}

/// People store ordered by id.
pub fn people_store(people: &[Person]) -> Result<SequenceStore<Person>> {
    let mut store = SequenceStore::with_comparator(4, person_by_id())?;
    store.extend_from_slice(people)?;
    Ok(store)
}
