// lazyseq-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for lazyseq integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`items`] - Collect a seq into a `Vec`, forcing it fully
//! - [`check_items`] - Compare a seq against a slice of elements
//! - [`counting`] - Wrap a function so every call bumps a shared counter
//! - [`naturals`] - The infinite sequence `0, 1, 2, ...`
//!
//! # Macros
//!
//! - [`assert_seq!`] - Assert that a seq holds exactly the given elements

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

#[allow(unused_imports)]
pub use lazyseq_core::{Buffer, Seq, Seqable, Sequential};

/// Collect every element of `s` in order.
#[must_use]
#[allow(dead_code)]
pub fn items<T: Clone + 'static>(s: &Seq<T>) -> Vec<T> {
    s.iter().collect()
}

/// Assert that `s` holds exactly `expected`, in order.
#[allow(dead_code)]
pub fn check_items<T>(s: &Seq<T>, expected: &[T], label: &str)
where
    T: Clone + Debug + PartialEq + 'static,
{
    let actual = items(s);
    assert_eq!(actual, expected, "Sequence {} did not match expected", label);
}

/// Wrap `f` so each call increments the returned counter.
#[allow(dead_code)]
pub fn counting<T, U>(f: impl Fn(T) -> U + 'static) -> (impl Fn(T) -> U + 'static, Rc<Cell<usize>>)
where
    T: 'static,
    U: 'static,
{
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let wrapped = move |x: T| {
        counter.set(counter.get() + 1);
        f(x)
    };
    (wrapped, calls)
}

/// `0, 1, 2, ...`
#[must_use]
#[allow(dead_code)]
pub fn naturals() -> Seq<i64> {
    lazyseq_core::iterate(|x: &i64| x + 1, 0)
}

/// Assert that a seq holds exactly the given elements, in order.
///
/// # Example
///
/// ```ignore
/// assert_seq!(take(2, &naturals()), [0, 1]);
/// ```
#[macro_export]
macro_rules! assert_seq {
    ($seq:expr, [$($item:expr),* $(,)?]) => {
        $crate::common::check_items(&$seq, &[$($item),*], stringify!($seq))
    };
}
