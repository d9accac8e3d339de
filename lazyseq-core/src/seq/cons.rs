// lazyseq-core - Minimal head/tail link cell
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::rc::Rc;

use crate::error::Result;
use crate::meta::{Meta, MetaMap};

use super::{Seq, Seqable, Sequential, drop_chain, equiv_walk};

struct ConsNode<T> {
    first: T,
    rest: Option<Seq<T>>,
}

impl<T> Drop for ConsNode<T> {
    fn drop(&mut self) {
        drop_chain(self.rest.take());
    }
}

/// An uncounted cell pairing a head with any sequence as its tail.
///
/// This is the cell the lazy algorithms emit: the tail is usually an
/// unforced [`LazySeq`](super::LazySeq). `rest` normalizes a missing tail to
/// the empty seq, while `next` returns `None` at the real end.
///
/// `count` walks the tail chain and never returns if that chain is
/// unbounded without passing through an [`Iterate`](super::Iterate).
pub struct Cons<T> {
    node: Rc<ConsNode<T>>,
    meta: Option<Rc<MetaMap>>,
}

impl<T> Clone for Cons<T> {
    fn clone(&self) -> Self {
        Cons {
            node: Rc::clone(&self.node),
            meta: self.meta.clone(),
        }
    }
}

impl<T> Cons<T> {
    pub fn new(first: T, rest: Option<Seq<T>>) -> Self {
        Cons {
            node: Rc::new(ConsNode { first, rest }),
            meta: None,
        }
    }

    pub fn head(&self) -> &T {
        &self.node.first
    }

    /// The tail exactly as supplied, without normalization.
    pub fn tail(&self) -> Option<&Seq<T>> {
        self.node.rest.as_ref()
    }

    pub(super) fn detach_tail(&mut self) -> Option<Seq<T>> {
        Rc::get_mut(&mut self.node).and_then(|node| node.rest.take())
    }
}

impl<T: Clone + 'static> Cons<T> {
    pub fn equiv(&self, other: &Seq<T>) -> bool
    where
        T: PartialEq,
    {
        equiv_walk(Some(Seq::Cons(self.clone())), other.seq())
    }
}

impl<T: Clone + 'static> Seqable for Cons<T> {
    type Item = T;

    fn to_seq(&self) -> Seq<T> {
        Seq::Cons(self.clone())
    }

    fn seq(&self) -> Option<Seq<T>> {
        Some(Seq::Cons(self.clone()))
    }
}

impl<T: Clone + 'static> Sequential for Cons<T> {
    fn first(&self) -> Option<T> {
        Some(self.node.first.clone())
    }

    fn rest(&self) -> Seq<T> {
        match &self.node.rest {
            Some(rest) => rest.clone(),
            None => Seq::empty(),
        }
    }

    fn next(&self) -> Option<Seq<T>> {
        self.node.rest.as_ref().and_then(Seqable::seq)
    }

    fn cons(&self, x: T) -> Seq<T> {
        Seq::Cons(Cons::new(x, Some(Seq::Cons(self.clone()))))
    }

    fn count(&self) -> Result<usize> {
        let rest = match &self.node.rest {
            Some(rest) => rest.count()?,
            None => 0,
        };
        Ok(1 + rest)
    }

    /// A cell always holds a head.
    fn is_empty(&self) -> bool {
        false
    }
}

impl<T> Meta for Cons<T> {
    fn meta(&self) -> Option<&Rc<MetaMap>> {
        self.meta.as_ref()
    }

    fn with_meta(&self, meta: Option<Rc<MetaMap>>) -> Self {
        Cons {
            node: Rc::clone(&self.node),
            meta,
        }
    }
}
