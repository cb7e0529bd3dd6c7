// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts for store invariants.
//!
//! The contracts panic in debug builds when an invariant is violated and
//! compile to nothing in release. Every mutating store operation runs them on
//! its way out, so a broken shift or a lost reservation fails the test that
//! caused it instead of corrupting a later read.

pub mod contracts;
