// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ordering engine: a caller-supplied three-way comparison.
//!
//! A store never owns the comparison logic outright. It holds a
//! reference-counted strategy object, so copies made by `clone` or
//! `copy_range` share the same comparator and nobody has to keep a function
//! pointer alive by hand.
//!
//! ```
//! use dynseq::Comparator;
//! use std::cmp::Ordering;
//!
//! // Integer contract: negative, zero, positive.
//! let cmp = Comparator::three_way(|a: &i32, b: &i32| i32::from(a > b) - i32::from(a < b));
//! assert_eq!(cmp.compare(&1, &2), Ordering::Less);
//! assert!(cmp.eq(&7, &7));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// Shared three-way comparator over `T`.
///
/// Cloning is cheap (an `Arc` bump) and every clone compares identically.
pub struct Comparator<T: ?Sized> {
    inner: Arc<CompareFn<T>>,
}

impl<T: ?Sized> Comparator<T> {
    /// Wrap a function returning [`Ordering`].
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Wrap a function following the integer contract: negative if `a`
    /// orders before `b`, zero if equal, positive otherwise.
    pub fn three_way<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> i32 + Send + Sync + 'static,
    {
        Self::new(move |a, b| f(a, b).cmp(&0))
    }

    /// Compare by a key extracted from each element.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |a, b| key(a).cmp(&key(b)))
    }

    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.inner)(a, b)
    }

    /// Comparator equality (`compare == Equal`), used for membership and dedup.
    #[inline]
    pub fn eq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Reverse the ordering.
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        let inner = Arc::clone(&self.inner);
        Self::new(move |a, b| inner(b, a))
    }

    /// True when both comparators are the same shared instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Ord> Comparator<T> {
    /// Natural ordering of `T`.
    pub fn natural() -> Self {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }
}

impl<T: ?Sized> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("shared", &Arc::strong_count(&self.inner))
            .finish()
    }
}
