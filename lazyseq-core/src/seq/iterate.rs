// lazyseq-core - Infinite generator sequence
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::error::{Error, Result};
use crate::meta::{Meta, MetaMap};

use super::{Cons, Seq, Seqable, Sequential, drop_chain, equiv_walk};

/// Step function of an [`Iterate`] sequence.
pub type StepFn<T> = Rc<dyn Fn(&T) -> T>;

enum IterValue<T> {
    /// Value not computed yet; holds the predecessor's realized value
    Pending(T),
    Realized(T),
}

struct IterateNode<T> {
    step: StepFn<T>,
    value: RefCell<IterValue<T>>,
    next: RefCell<Option<Iterate<T>>>,
}

impl<T> Drop for IterateNode<T> {
    fn drop(&mut self) {
        drop_chain(self.next.get_mut().take().map(Seq::Iterate));
    }
}

/// The infinite sequence `x, f(x), f(f(x)), ...`.
///
/// Each node computes its value on first access and builds exactly one
/// successor on first `next`. The successor holds a copy of this node's
/// realized value, never a reference back to this node, so chains form no
/// reference cycles.
///
/// `count` fails with [`Error::InfiniteSequence`].
pub struct Iterate<T> {
    node: Rc<IterateNode<T>>,
    meta: Option<Rc<MetaMap>>,
}

impl<T> Clone for Iterate<T> {
    fn clone(&self) -> Self {
        Iterate {
            node: Rc::clone(&self.node),
            meta: self.meta.clone(),
        }
    }
}

impl<T> Iterate<T> {
    pub(super) fn detach_tail(&mut self) -> Option<Iterate<T>> {
        Rc::get_mut(&mut self.node).and_then(|node| node.next.get_mut().take())
    }
}

impl<T: Clone + 'static> Iterate<T> {
    /// A sequence starting at `seed`.
    pub fn new(step: impl Fn(&T) -> T + 'static, seed: T) -> Self {
        Iterate::from_parts(Rc::new(step), IterValue::Realized(seed))
    }

    fn from_parts(step: StepFn<T>, value: IterValue<T>) -> Self {
        Iterate {
            node: Rc::new(IterateNode {
                step,
                value: RefCell::new(value),
                next: RefCell::new(None),
            }),
            meta: None,
        }
    }

    /// This node's value, computing and caching it on first access.
    pub fn value(&self) -> T {
        let realized = match &*self.node.value.borrow() {
            IterValue::Realized(value) => return value.clone(),
            IterValue::Pending(previous) => (self.node.step)(previous),
        };
        *self.node.value.borrow_mut() = IterValue::Realized(realized.clone());
        realized
    }

    /// The value if it has already been computed.
    pub fn realized_value(&self) -> Option<T> {
        match &*self.node.value.borrow() {
            IterValue::Realized(value) => Some(value.clone()),
            IterValue::Pending(_) => None,
        }
    }

    /// The successor if it has already been built.
    pub fn successor(&self) -> Option<Iterate<T>> {
        self.node.next.borrow().clone()
    }

    /// The successor node, building it from this node's value on first call.
    pub fn next_node(&self) -> Iterate<T> {
        if let Some(next) = self.successor() {
            return next;
        }
        let next = Iterate::from_parts(
            Rc::clone(&self.node.step),
            IterValue::Pending(self.value()),
        );
        trace!("built iterate successor");
        *self.node.next.borrow_mut() = Some(next.clone());
        next
    }

    /// True when both are the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Only terminates when `other` is finite.
    pub fn equiv(&self, other: &Seq<T>) -> bool
    where
        T: PartialEq,
    {
        equiv_walk(Some(Seq::Iterate(self.clone())), other.seq())
    }
}

impl<T: Clone + 'static> Seqable for Iterate<T> {
    type Item = T;

    fn to_seq(&self) -> Seq<T> {
        Seq::Iterate(self.clone())
    }

    fn seq(&self) -> Option<Seq<T>> {
        Some(Seq::Iterate(self.clone()))
    }
}

impl<T: Clone + 'static> Sequential for Iterate<T> {
    fn first(&self) -> Option<T> {
        Some(self.value())
    }

    fn rest(&self) -> Seq<T> {
        Seq::Iterate(self.next_node())
    }

    fn next(&self) -> Option<Seq<T>> {
        Some(Seq::Iterate(self.next_node()))
    }

    fn cons(&self, x: T) -> Seq<T> {
        Seq::Cons(Cons::new(x, Some(Seq::Iterate(self.clone()))))
    }

    fn count(&self) -> Result<usize> {
        Err(Error::infinite("iterate"))
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl<T> Meta for Iterate<T> {
    fn meta(&self) -> Option<&Rc<MetaMap>> {
        self.meta.as_ref()
    }

    fn with_meta(&self, meta: Option<Rc<MetaMap>>) -> Self {
        Iterate {
            node: Rc::clone(&self.node),
            meta,
        }
    }
}
