// lazyseq-core - Lazy sequence transformations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! map, filter, take, concat
//!
//! Each function captures its input with `to_seq` and returns a pending
//! [`LazySeq`], so nothing is forced at call time. When a node is forced it
//! yields one cell whose tail is the next pending node. Cells are built
//! directly rather than through `cons`, which would force that tail.

use std::rc::Rc;

use im::Vector;
use tracing::trace;

use crate::seq::{Cons, LazySeq, Seq, Seqable, Sequential};

// ============================================================================
// map
// ============================================================================

/// Lazily apply `f` to each element of `coll`.
pub fn map<S, U, F>(f: F, coll: &S) -> Seq<U>
where
    S: Seqable + ?Sized,
    U: Clone + 'static,
    F: Fn(S::Item) -> U + 'static,
{
    map_step(Rc::new(f), coll.to_seq())
}

fn map_step<T, U>(f: Rc<dyn Fn(T) -> U>, source: Seq<T>) -> Seq<U>
where
    T: Clone + 'static,
    U: Clone + 'static,
{
    Seq::Lazy(LazySeq::new(move || {
        let Some(s) = source.seq() else {
            return Seq::empty();
        };
        let Some(x) = s.first() else {
            return Seq::empty();
        };
        let tail = map_step(Rc::clone(&f), s.rest());
        Seq::Cons(Cons::new(f(x), Some(tail)))
    }))
}

// ============================================================================
// filter
// ============================================================================

/// Lazily keep the elements of `coll` satisfying `pred`.
///
/// Forcing a node skips rejected elements in a loop. A node over an
/// infinite input with no further matches never finishes forcing.
pub fn filter<S, P>(pred: P, coll: &S) -> Seq<S::Item>
where
    S: Seqable + ?Sized,
    P: Fn(&S::Item) -> bool + 'static,
{
    filter_step(Rc::new(pred), coll.to_seq())
}

fn filter_step<T: Clone + 'static>(pred: Rc<dyn Fn(&T) -> bool>, source: Seq<T>) -> Seq<T> {
    Seq::Lazy(LazySeq::new(move || {
        let mut current = source.seq();
        let mut skipped = 0usize;
        while let Some(s) = current {
            let Some(x) = s.first() else {
                break;
            };
            if pred(&x) {
                if skipped > 0 {
                    trace!(skipped, "filter skipped elements");
                }
                let tail = filter_step(Rc::clone(&pred), s.rest());
                return Seq::Cons(Cons::new(x, Some(tail)));
            }
            skipped += 1;
            current = s.next();
        }
        Seq::empty()
    }))
}

// ============================================================================
// take
// ============================================================================

/// Lazily yield at most `n` elements of `coll`.
///
/// With `n == 0` the input is never touched. The last cell has no tail, so
/// nothing past the `n`th element is forced.
pub fn take<S>(n: usize, coll: &S) -> Seq<S::Item>
where
    S: Seqable + ?Sized,
{
    take_step(n, coll.to_seq())
}

fn take_step<T: Clone + 'static>(n: usize, source: Seq<T>) -> Seq<T> {
    Seq::Lazy(LazySeq::new(move || {
        if n == 0 {
            return Seq::empty();
        }
        let Some(s) = source.seq() else {
            return Seq::empty();
        };
        let Some(x) = s.first() else {
            return Seq::empty();
        };
        let tail = if n > 1 {
            Some(take_step(n - 1, s.rest()))
        } else {
            None
        };
        Seq::Cons(Cons::new(x, tail))
    }))
}

// ============================================================================
// concat
// ============================================================================

/// Lazily yield the elements of each sequence in turn.
///
/// Empty inputs are skipped. An infinite input shadows everything after it.
pub fn concat<T, I>(seqs: I) -> Seq<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = Seq<T>>,
{
    concat_step(seqs.into_iter().collect())
}

fn concat_step<T: Clone + 'static>(pending: Vector<Seq<T>>) -> Seq<T> {
    Seq::Lazy(LazySeq::new(move || {
        let mut pending = pending;
        while let Some(head) = pending.pop_front() {
            if let Some(s) = head.seq()
                && let Some(x) = s.first()
            {
                pending.push_front(s.rest());
                return Seq::Cons(Cons::new(x, Some(concat_step(pending))));
            }
        }
        Seq::empty()
    }))
}
