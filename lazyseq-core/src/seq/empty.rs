// lazyseq-core - The empty sequence
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::rc::Rc;

use crate::error::Result;
use crate::meta::{Meta, MetaMap};

use super::{PersistentList, Seq, Seqable};

/// The sequence with no elements, the terminal of every node kind.
///
/// Every operation is total. `first` is `None`, `rest` is the empty seq
/// itself and `next` is `None`. It carries no element type, so its
/// operations are generic over the element type of the caller.
#[derive(Clone, Debug, Default)]
pub struct EmptySeq {
    meta: Option<Rc<MetaMap>>,
}

impl EmptySeq {
    pub fn new() -> Self {
        EmptySeq { meta: None }
    }

    pub fn first<T>(&self) -> Option<T> {
        None
    }

    pub fn rest<T>(&self) -> Seq<T> {
        Seq::Empty(self.clone())
    }

    pub fn next<T>(&self) -> Option<Seq<T>> {
        None
    }

    /// A one-element persistent list.
    pub fn cons<T>(&self, x: T) -> Seq<T> {
        Seq::List(PersistentList::singleton(x))
    }

    pub fn count(&self) -> Result<usize> {
        Ok(0)
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    /// True only against another sequence with no elements.
    pub fn equiv<T: Clone + 'static>(&self, other: &Seq<T>) -> bool {
        other.seq().is_none()
    }
}

impl Meta for EmptySeq {
    fn meta(&self) -> Option<&Rc<MetaMap>> {
        self.meta.as_ref()
    }

    fn with_meta(&self, meta: Option<Rc<MetaMap>>) -> Self {
        EmptySeq { meta }
    }
}
