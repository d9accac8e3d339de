// lazyseq-core - Persistent list
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::meta::{Meta, MetaMap};

use super::{Seq, Seqable, Sequential, drop_chain, equiv_walk};

struct ListNode<T> {
    first: T,
    /// `None` is the empty list
    rest: Option<PersistentList<T>>,
    count: usize,
}

impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        drop_chain(self.rest.take().map(Seq::List));
    }
}

/// An eager, counted, immutable singly-linked list.
///
/// `cons` shares the existing list as the new tail, so every list stays
/// reachable and unchanged after elements are prepended to it.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `cons`    | O(1)       |
/// | `first`   | O(1)       |
/// | `rest`    | O(1)       |
/// | `count`   | O(1)       |
pub struct PersistentList<T> {
    node: Rc<ListNode<T>>,
    meta: Option<Rc<MetaMap>>,
}

// Manual impl: cloning shares the node and needs no `T: Clone`.
impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        PersistentList {
            node: Rc::clone(&self.node),
            meta: self.meta.clone(),
        }
    }
}

impl<T> PersistentList<T> {
    /// A list holding only `first`.
    pub fn singleton(first: T) -> Self {
        PersistentList {
            node: Rc::new(ListNode {
                first,
                rest: None,
                count: 1,
            }),
            meta: None,
        }
    }

    /// Build a list node from explicit parts.
    ///
    /// `rest` and `count` must be supplied together or not at all, and a
    /// supplied count must be exactly one more than the tail's.
    pub fn try_new(
        first: T,
        rest: Option<PersistentList<T>>,
        count: Option<usize>,
    ) -> Result<Self> {
        match (rest, count) {
            (None, None) => Ok(PersistentList::singleton(first)),
            (Some(rest), Some(count)) => {
                if count != rest.len() + 1 {
                    return Err(Error::construction(
                        "persistent list",
                        format!(
                            "count {} does not match tail of length {}",
                            count,
                            rest.len()
                        ),
                    ));
                }
                let meta = rest.meta.clone();
                Ok(PersistentList {
                    node: Rc::new(ListNode {
                        first,
                        rest: Some(rest),
                        count,
                    }),
                    meta,
                })
            }
            _ => Err(Error::construction(
                "persistent list",
                "tail and count must be supplied together",
            )),
        }
    }

    /// Build a list holding `items` in order, or `None` if there are none.
    pub fn from_vec(mut items: Vec<T>) -> Option<Self> {
        let mut list = PersistentList::singleton(items.pop()?);
        while let Some(x) = items.pop() {
            list = list.prepend(x);
        }
        Some(list)
    }

    /// Prepend `x`, sharing this list as the tail and keeping its metadata.
    pub fn prepend(&self, x: T) -> Self {
        PersistentList {
            node: Rc::new(ListNode {
                first: x,
                rest: Some(self.clone()),
                count: self.node.count + 1,
            }),
            meta: self.meta.clone(),
        }
    }

    pub fn head(&self) -> &T {
        &self.node.first
    }

    /// The tail, or `None` when this is the last node.
    pub fn tail(&self) -> Option<&PersistentList<T>> {
        self.node.rest.as_ref()
    }

    pub fn len(&self) -> usize {
        self.node.count
    }

    /// True when both lists are the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    pub(super) fn detach_tail(&mut self) -> Option<PersistentList<T>> {
        Rc::get_mut(&mut self.node).and_then(|node| node.rest.take())
    }
}

impl<T: Clone + 'static> PersistentList<T> {
    pub fn equiv(&self, other: &Seq<T>) -> bool
    where
        T: PartialEq,
    {
        // Counted on both sides: a length mismatch is decided without walking
        if let Seq::List(o) = other
            && o.len() != self.len()
        {
            return false;
        }
        equiv_walk(Some(Seq::List(self.clone())), other.seq())
    }
}

impl<T: Clone + 'static> Seqable for PersistentList<T> {
    type Item = T;

    fn to_seq(&self) -> Seq<T> {
        Seq::List(self.clone())
    }

    fn seq(&self) -> Option<Seq<T>> {
        Some(Seq::List(self.clone()))
    }
}

impl<T: Clone + 'static> Sequential for PersistentList<T> {
    fn first(&self) -> Option<T> {
        Some(self.node.first.clone())
    }

    fn rest(&self) -> Seq<T> {
        match &self.node.rest {
            Some(rest) => Seq::List(rest.clone()),
            None => Seq::empty(),
        }
    }

    fn next(&self) -> Option<Seq<T>> {
        self.node.rest.clone().map(Seq::List)
    }

    fn cons(&self, x: T) -> Seq<T> {
        Seq::List(self.prepend(x))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.node.count)
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl<T> Meta for PersistentList<T> {
    fn meta(&self) -> Option<&Rc<MetaMap>> {
        self.meta.as_ref()
    }

    fn with_meta(&self, meta: Option<Rc<MetaMap>>) -> Self {
        PersistentList {
            node: Rc::clone(&self.node),
            meta,
        }
    }
}
