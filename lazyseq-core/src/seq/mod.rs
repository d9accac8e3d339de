// lazyseq-core - The Seq contract and its node kinds
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The sequence contract.
//!
//! [`Seq`] is a closed, tagged set of node kinds. Every kind answers the
//! same [`Sequential`] operations; collections that can produce a view
//! implement [`Seqable`]; collections that accept added elements implement
//! [`Conjable`].
//!
//! The distinction between `rest` and `next` is load-bearing: `rest` always
//! returns a sequence (possibly empty), while `next` returns `None` once no
//! elements remain.

mod array;
mod cons;
mod empty;
mod iter;
mod iterate;
mod lazy;
mod list;
mod print;

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::meta::{Meta, MetaMap};

pub use array::ArraySeq;
pub use cons::Cons;
pub use empty::EmptySeq;
pub use iter::SeqIter;
pub use iterate::{Iterate, StepFn};
pub use lazy::{LazySeq, LazySeqState, Thunk};
pub use list::PersistentList;

/// Capability to produce a canonical [`Seq`] view.
pub trait Seqable {
    type Item: Clone + 'static;

    /// The collection as a `Seq` without forcing anything.
    ///
    /// The result may be logically empty (or lazily so); algorithms that
    /// defer work capture this and call [`Seqable::seq`] later.
    fn to_seq(&self) -> Seq<Self::Item>;

    /// The canonical view, or `None` if there are no elements.
    ///
    /// This may force a lazy sequence.
    fn seq(&self) -> Option<Seq<Self::Item>> {
        self.to_seq().seq()
    }
}

/// The traversal operations shared by every node kind.
pub trait Sequential: Seqable {
    /// The first element, or `None` when empty.
    fn first(&self) -> Option<Self::Item>;

    /// Everything after the first element. Never `None`; empty at the end.
    fn rest(&self) -> Seq<Self::Item>;

    /// Everything after the first element, or `None` at the end.
    fn next(&self) -> Option<Seq<Self::Item>>;

    /// Prepend `x`.
    fn cons(&self, x: Self::Item) -> Seq<Self::Item>;

    /// Number of elements. Fails for sequences that are infinite by construction.
    fn count(&self) -> Result<usize>;

    fn is_empty(&self) -> bool;

    fn empty(&self) -> Seq<Self::Item> {
        Seq::empty()
    }
}

/// Capability to receive an added element.
///
/// Append-capable collections add at the end; every [`Seq`] adds at the
/// front. Folding with `conj` therefore preserves order into a buffer and
/// reverses it into a seq.
pub trait Conjable: Sized {
    type Item;

    fn conj(&self, x: Self::Item) -> Self;
}

/// A sequence: one of the concrete node kinds.
#[derive(Clone)]
pub enum Seq<T> {
    /// The terminal empty sequence
    Empty(EmptySeq),
    /// Eager, counted persistent list
    List(PersistentList<T>),
    /// Uncounted head/tail cell
    Cons(Cons<T>),
    /// Index view over a shared buffer
    Array(ArraySeq<T>),
    /// Deferred, memoized sequence
    Lazy(LazySeq<T>),
    /// Infinite stream from a seed and step function
    Iterate(Iterate<T>),
}

impl<T> Seq<T> {
    /// The empty sequence.
    pub fn empty() -> Self {
        Seq::Empty(EmptySeq::new())
    }

    /// Short name of the node kind, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Seq::Empty(_) => "empty seq",
            Seq::List(_) => "persistent list",
            Seq::Cons(_) => "cons",
            Seq::Array(_) => "array seq",
            Seq::Lazy(_) => "lazy seq",
            Seq::Iterate(_) => "iterate",
        }
    }
}

impl<T: Clone + 'static> Seq<T> {
    /// Build a persistent list holding `items` in order.
    pub fn list(items: Vec<T>) -> Self {
        match PersistentList::from_vec(items) {
            Some(list) => Seq::List(list),
            None => Seq::empty(),
        }
    }

    /// Iterate over the elements, forcing lazily as the iterator advances.
    pub fn iter(&self) -> SeqIter<T> {
        SeqIter::new(self.seq())
    }

    /// Element-wise equality with early exit. Elements compare shallowly.
    ///
    /// Never returns if both sequences are infinite.
    pub fn equiv(&self, other: &Seq<T>) -> bool
    where
        T: PartialEq,
    {
        match self {
            Seq::Empty(e) => e.equiv(other),
            Seq::List(l) => l.equiv(other),
            Seq::Cons(c) => c.equiv(other),
            Seq::Array(a) => a.equiv(other),
            Seq::Lazy(l) => l.equiv(other),
            Seq::Iterate(i) => i.equiv(other),
        }
    }
}

impl<T> Seq<T> {
    /// Take the tail out of this node if this is the last handle on it.
    fn detach_tail(&mut self) -> Option<Seq<T>> {
        match self {
            Seq::List(l) => l.detach_tail().map(Seq::List),
            Seq::Cons(c) => c.detach_tail(),
            Seq::Lazy(l) => l.detach_tail(),
            Seq::Iterate(i) => i.detach_tail().map(Seq::Iterate),
            Seq::Empty(_) | Seq::Array(_) => None,
        }
    }
}

/// Free a chain of nodes one at a time.
///
/// Node `Drop` impls hand their tail here so that dropping the head of a
/// long chain runs in a loop instead of one nested drop per element. The
/// walk stops at the first node still shared with another handle.
pub(crate) fn drop_chain<T>(mut next: Option<Seq<T>>) {
    while let Some(mut seq) = next {
        next = seq.detach_tail();
    }
}

/// Walk two sequences in lock-step comparing elements.
pub(crate) fn equiv_walk<T>(mut a: Option<Seq<T>>, mut b: Option<Seq<T>>) -> bool
where
    T: Clone + PartialEq + 'static,
{
    loop {
        match (a, b) {
            (None, None) => return true,
            (Some(x), Some(y)) => {
                if x.first() != y.first() {
                    return false;
                }
                a = x.next();
                b = y.next();
            }
            _ => return false,
        }
    }
}

impl<T: Clone + 'static> Seqable for Seq<T> {
    type Item = T;

    fn to_seq(&self) -> Seq<T> {
        self.clone()
    }

    fn seq(&self) -> Option<Seq<T>> {
        match self {
            Seq::Empty(_) => None,
            Seq::List(l) => l.seq(),
            Seq::Cons(c) => c.seq(),
            Seq::Array(a) => a.seq(),
            Seq::Lazy(l) => l.seq(),
            Seq::Iterate(i) => i.seq(),
        }
    }
}

impl<T: Clone + 'static> Sequential for Seq<T> {
    fn first(&self) -> Option<T> {
        match self {
            Seq::Empty(e) => e.first(),
            Seq::List(l) => l.first(),
            Seq::Cons(c) => c.first(),
            Seq::Array(a) => a.first(),
            Seq::Lazy(l) => l.first(),
            Seq::Iterate(i) => i.first(),
        }
    }

    fn rest(&self) -> Seq<T> {
        match self {
            Seq::Empty(e) => e.rest(),
            Seq::List(l) => l.rest(),
            Seq::Cons(c) => c.rest(),
            Seq::Array(a) => a.rest(),
            Seq::Lazy(l) => l.rest(),
            Seq::Iterate(i) => i.rest(),
        }
    }

    fn next(&self) -> Option<Seq<T>> {
        match self {
            Seq::Empty(e) => e.next(),
            Seq::List(l) => l.next(),
            Seq::Cons(c) => c.next(),
            Seq::Array(a) => a.next(),
            Seq::Lazy(l) => l.next(),
            Seq::Iterate(i) => i.next(),
        }
    }

    fn cons(&self, x: T) -> Seq<T> {
        match self {
            Seq::Empty(e) => e.cons(x),
            Seq::List(l) => l.cons(x),
            Seq::Cons(c) => c.cons(x),
            Seq::Array(a) => a.cons(x),
            Seq::Lazy(l) => l.cons(x),
            Seq::Iterate(i) => i.cons(x),
        }
    }

    /// Counts iteratively through uncounted cells and lazy nodes, stopping
    /// at the first node that knows its own count.
    fn count(&self) -> Result<usize> {
        let mut total = 0usize;
        let mut current = self.clone();
        loop {
            current = match current {
                Seq::Cons(c) => {
                    total += 1;
                    match c.tail() {
                        Some(tail) => tail.clone(),
                        None => return Ok(total),
                    }
                }
                Seq::Lazy(l) => match l.realize() {
                    Some(s) => s,
                    None => return Ok(total),
                },
                Seq::Empty(_) => return Ok(total),
                Seq::List(l) => return Ok(total + l.len()),
                Seq::Array(a) => return Ok(total + a.count()?),
                Seq::Iterate(i) => return i.count(),
            };
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Seq::Empty(_) => true,
            Seq::List(l) => l.is_empty(),
            Seq::Cons(c) => c.is_empty(),
            Seq::Array(a) => a.is_empty(),
            Seq::Lazy(l) => l.is_empty(),
            Seq::Iterate(i) => i.is_empty(),
        }
    }
}

/// Every `Seq` receives added elements at the front.
impl<T: Clone + 'static> Conjable for Seq<T> {
    type Item = T;

    fn conj(&self, x: T) -> Self {
        crate::builtins::cons(x, self)
    }
}

impl<T: Clone> Meta for Seq<T> {
    fn meta(&self) -> Option<&Rc<MetaMap>> {
        match self {
            Seq::Empty(e) => e.meta(),
            Seq::List(l) => l.meta(),
            Seq::Cons(c) => c.meta(),
            Seq::Array(a) => a.meta(),
            Seq::Lazy(l) => l.meta(),
            Seq::Iterate(i) => i.meta(),
        }
    }

    fn with_meta(&self, meta: Option<Rc<MetaMap>>) -> Self {
        match self {
            Seq::Empty(e) => Seq::Empty(e.with_meta(meta)),
            Seq::List(l) => Seq::List(l.with_meta(meta)),
            Seq::Cons(c) => Seq::Cons(c.with_meta(meta)),
            Seq::Array(a) => Seq::Array(a.with_meta(meta)),
            Seq::Lazy(l) => Seq::Lazy(l.with_meta(meta)),
            Seq::Iterate(i) => Seq::Iterate(i.with_meta(meta)),
        }
    }
}

/// `None` behaves as the empty collection.
impl<S: Seqable> Seqable for Option<S> {
    type Item = S::Item;

    fn to_seq(&self) -> Seq<S::Item> {
        match self {
            Some(coll) => coll.to_seq(),
            None => Seq::empty(),
        }
    }

    fn seq(&self) -> Option<Seq<S::Item>> {
        self.as_ref().and_then(Seqable::seq)
    }
}

impl<T: Clone + PartialEq + 'static> PartialEq for Seq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equiv(other)
    }
}

impl<T: Clone + 'static> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::list(iter.into_iter().collect())
    }
}

impl<T: Clone + 'static> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        SeqIter::new(self.seq())
    }
}

impl<T: Clone + 'static> IntoIterator for &Seq<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

impl<T> From<EmptySeq> for Seq<T> {
    fn from(e: EmptySeq) -> Self {
        Seq::Empty(e)
    }
}

impl<T> From<PersistentList<T>> for Seq<T> {
    fn from(l: PersistentList<T>) -> Self {
        Seq::List(l)
    }
}

impl<T> From<Cons<T>> for Seq<T> {
    fn from(c: Cons<T>) -> Self {
        Seq::Cons(c)
    }
}

impl<T> From<ArraySeq<T>> for Seq<T> {
    fn from(a: ArraySeq<T>) -> Self {
        Seq::Array(a)
    }
}

impl<T> From<LazySeq<T>> for Seq<T> {
    fn from(l: LazySeq<T>) -> Self {
        Seq::Lazy(l)
    }
}

impl<T> From<Iterate<T>> for Seq<T> {
    fn from(i: Iterate<T>) -> Self {
        Seq::Iterate(i)
    }
}

impl<T: fmt::Display + Clone + 'static> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print::write_seq(f, self, |f, x| write!(f, "{}", x))
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print::write_seq(f, self, |f, x| write!(f, "{:?}", x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Seq::<i32>::empty().kind(), "empty seq");
        assert_eq!(Seq::list(vec![1]).kind(), "persistent list");
    }

    #[test]
    fn test_list_from_vec_keeps_order() {
        let s = Seq::list(vec![1, 2, 3]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(s.count(), Ok(3));
    }

    #[test]
    fn test_empty_vec_is_empty_seq() {
        let s: Seq<i32> = Seq::list(Vec::new());
        assert!(matches!(s, Seq::Empty(_)));
        assert!(s.seq().is_none());
    }

    #[test]
    fn test_count_through_mixed_chain() {
        let tail = Seq::list(vec![3, 4]);
        let lazy = Seq::Lazy(LazySeq::new(move || tail));
        let chain = Seq::Cons(Cons::new(1, Some(Seq::Cons(Cons::new(2, Some(lazy))))));
        assert_eq!(chain.count(), Ok(4));
    }

    #[test]
    fn test_option_seqable() {
        let none: Option<Seq<i32>> = None;
        assert!(none.seq().is_none());
        assert!(matches!(none.to_seq(), Seq::Empty(_)));

        let some = Some(Seq::list(vec![7]));
        assert_eq!(some.seq().and_then(|s| s.first()), Some(7));
    }

    #[test]
    fn test_equiv_across_kinds() {
        let list = Seq::list(vec![1, 2, 3]);
        let cons = Seq::Cons(Cons::new(1, Some(Seq::list(vec![2, 3]))));
        assert_eq!(list, cons);
        assert_ne!(list, Seq::list(vec![1, 2]));
        assert_ne!(list, Seq::list(vec![1, 2, 4]));
    }
}
