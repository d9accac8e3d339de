// lazyseq-core - Contract dispatch helpers
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! seq, cons, conj, first, rest, next, count, empty, sequence

use crate::error::Result;
use crate::seq::{Conjable, PersistentList, Seq, Seqable, Sequential};

/// The canonical view of `coll`, or `None` if it has no elements.
pub fn seq<S: Seqable + ?Sized>(coll: &S) -> Option<Seq<S::Item>> {
    coll.seq()
}

/// Like [`seq`], but an empty collection yields the empty seq.
pub fn sequence<S: Seqable + ?Sized>(coll: &S) -> Seq<S::Item> {
    coll.seq().unwrap_or_else(Seq::empty)
}

/// Prepend `x` to `coll`.
///
/// An empty collection yields a one-element persistent list; otherwise the
/// collection's own seq decides how to prepend.
pub fn cons<S: Seqable + ?Sized>(x: S::Item, coll: &S) -> Seq<S::Item> {
    match coll.seq() {
        Some(s) => s.cons(x),
        None => Seq::List(PersistentList::singleton(x)),
    }
}

/// Add `x` to `coll`: appended for buffers, prepended for seqs.
pub fn conj<C: Conjable>(coll: &C, x: C::Item) -> C {
    coll.conj(x)
}

pub fn first<S: Seqable + ?Sized>(coll: &S) -> Option<S::Item> {
    coll.seq().and_then(|s| s.first())
}

/// First element of the first element of `coll`.
pub fn ffirst<S>(coll: &S) -> Option<<S::Item as Seqable>::Item>
where
    S: Seqable + ?Sized,
    S::Item: Seqable,
{
    first(coll).and_then(|inner| first(&inner))
}

/// Everything after the first element; the empty seq for an empty collection.
pub fn rest<S: Seqable + ?Sized>(coll: &S) -> Seq<S::Item> {
    match coll.seq() {
        Some(s) => s.rest(),
        None => Seq::empty(),
    }
}

pub fn next<S: Seqable + ?Sized>(coll: &S) -> Option<Seq<S::Item>> {
    coll.seq().and_then(|s| s.next())
}

/// Number of elements.
///
/// Fails for infinite generator sequences. Never returns for an unbounded
/// lazy chain that does not pass through one.
pub fn count<S: Seqable + ?Sized>(coll: &S) -> Result<usize> {
    match coll.seq() {
        Some(s) => s.count(),
        None => Ok(0),
    }
}

pub fn is_empty<S: Seqable + ?Sized>(coll: &S) -> bool {
    coll.seq().is_none()
}

/// The empty seq, without the collection's metadata.
pub fn empty<S: Seqable + ?Sized>(_coll: &S) -> Seq<S::Item> {
    Seq::empty()
}
