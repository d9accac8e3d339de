// lazyseq-core - Memoizing lazy sequence
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Deferred sequences.
//!
//! A lazy seq holds either a thunk or its realized result. Forcing runs the
//! thunk at most once; if the thunk returns another pending lazy seq, that
//! one is forced too, repeatedly, until a concrete node or the empty result
//! is reached. Every lazy seq forced along the way caches the same result,
//! so callers never observe an unforced nested thunk.
//!
//! The state lives in an `Rc<RefCell<_>>`, so lazy seqs are confined to one
//! thread. A multi-threaded variant would need an atomic check-and-install
//! transition from pending to realized.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::meta::{Meta, MetaMap};

use super::{Cons, Seq, Seqable, Sequential, drop_chain};

/// A deferred computation producing a sequence.
pub type Thunk<T> = Box<dyn FnOnce() -> Seq<T>>;

/// Internal state of a lazy sequence
pub enum LazySeqState<T> {
    /// Not yet forced
    Pending(Thunk<T>),
    /// The thunk has been taken and is running
    Realizing,
    /// Forced. `None` is the logically empty sequence; `Some` never holds
    /// another lazy seq.
    Realized(Option<Seq<T>>),
    /// The thunk panicked. Forcing again panics.
    Failed,
}

/// A Clojure-style lazy sequence.
pub struct LazySeq<T> {
    state: Rc<RefCell<LazySeqState<T>>>,
    meta: Option<Rc<MetaMap>>,
}

impl<T> Clone for LazySeq<T> {
    fn clone(&self) -> Self {
        LazySeq {
            state: Rc::clone(&self.state),
            meta: self.meta.clone(),
        }
    }
}

impl<T: Clone + 'static> LazySeq<T> {
    /// Create a lazy sequence from a thunk.
    pub fn new(thunk: impl FnOnce() -> Seq<T> + 'static) -> Self {
        LazySeq::from_state(LazySeqState::Pending(Box::new(thunk)))
    }

    /// Wrap an existing sequence. A lazy input stays unforced.
    pub fn from_seq(seq: Seq<T>) -> Self {
        match seq {
            Seq::Lazy(inner) => LazySeq::new(move || Seq::Lazy(inner)),
            other => LazySeq::from_state(LazySeqState::Realized(other.seq())),
        }
    }

    /// Build from exactly one of a sequence or a thunk.
    pub fn try_new(seq: Option<Seq<T>>, thunk: Option<Thunk<T>>) -> Result<Self> {
        match (seq, thunk) {
            (Some(seq), None) => Ok(LazySeq::from_seq(seq)),
            (None, Some(thunk)) => Ok(LazySeq::from_state(LazySeqState::Pending(thunk))),
            (None, None) => Err(Error::construction(
                "lazy seq",
                "either a seq or a thunk is required",
            )),
            (Some(_), Some(_)) => Err(Error::construction(
                "lazy seq",
                "only one of a seq or a thunk may be supplied",
            )),
        }
    }

    fn from_state(state: LazySeqState<T>) -> Self {
        LazySeq {
            state: Rc::new(RefCell::new(state)),
            meta: None,
        }
    }

    /// Check if the lazy sequence has been forced.
    pub fn is_realized(&self) -> bool {
        matches!(*self.state.borrow(), LazySeqState::Realized(_))
    }

    /// The cached result without forcing: `None` while pending, otherwise
    /// the realized sequence (itself `None` when empty).
    pub fn cached(&self) -> Option<Option<Seq<T>>> {
        match &*self.state.borrow() {
            LazySeqState::Realized(result) => Some(result.clone()),
            LazySeqState::Pending(_) | LazySeqState::Realizing | LazySeqState::Failed => None,
        }
    }

    /// Force the sequence and return the realized result.
    ///
    /// Idempotent: after the first call this only reads the cache.
    ///
    /// # Panics
    ///
    /// Panics if an earlier realization of this node panicked.
    pub fn realize(&self) -> Option<Seq<T>> {
        match &*self.state.borrow() {
            LazySeqState::Realized(result) => return result.clone(),
            LazySeqState::Failed => panic!("lazy seq forced after its thunk panicked"),
            LazySeqState::Pending(_) | LazySeqState::Realizing => {}
        }

        let Some(thunk) = self.take_thunk() else {
            warn!("lazy seq forced while it is being realized; treating as empty");
            return None;
        };

        let mut guard = RealizeGuard {
            nodes: vec![self.clone()],
        };
        trace!("invoking lazy seq thunk");
        let mut raw = thunk();
        let result = loop {
            match raw {
                Seq::Lazy(inner) => match inner.take_thunk() {
                    Some(inner_thunk) => {
                        guard.nodes.push(inner);
                        raw = inner_thunk();
                    }
                    None => break inner.realize(),
                },
                other => break other.seq(),
            }
        };

        let nodes = guard.disarm();
        if nodes.len() > 1 {
            debug!(depth = nodes.len() - 1, "flattened nested lazy seqs");
        }
        for node in &nodes {
            node.set_realized(result.clone());
        }
        result
    }

    /// Move a pending thunk out, leaving the node `Realizing`.
    fn take_thunk(&self) -> Option<Thunk<T>> {
        let mut state = self.state.borrow_mut();
        if !matches!(*state, LazySeqState::Pending(_)) {
            return None;
        }
        match std::mem::replace(&mut *state, LazySeqState::Realizing) {
            LazySeqState::Pending(thunk) => Some(thunk),
            _ => None,
        }
    }

    fn set_realized(&self, result: Option<Seq<T>>) {
        *self.state.borrow_mut() = LazySeqState::Realized(result);
    }

    pub fn equiv(&self, other: &Seq<T>) -> bool
    where
        T: PartialEq,
    {
        match self.realize() {
            Some(s) => s.equiv(other),
            None => other.seq().is_none(),
        }
    }
}

impl<T> LazySeq<T> {
    pub(super) fn detach_tail(&mut self) -> Option<Seq<T>> {
        match Rc::get_mut(&mut self.state)?.get_mut() {
            LazySeqState::Realized(result) => result.take(),
            _ => None,
        }
    }
}

impl<T> Drop for LazySeq<T> {
    fn drop(&mut self) {
        drop_chain(self.detach_tail());
    }
}

/// Nodes whose thunks are running. Dropped without `disarm`, which only
/// happens while unwinding out of a thunk, it marks them all failed.
struct RealizeGuard<T> {
    nodes: Vec<LazySeq<T>>,
}

impl<T> RealizeGuard<T> {
    fn disarm(mut self) -> Vec<LazySeq<T>> {
        std::mem::take(&mut self.nodes)
    }
}

impl<T> Drop for RealizeGuard<T> {
    fn drop(&mut self) {
        for node in &self.nodes {
            // try_borrow_mut: a second panic here would abort
            if let Ok(mut state) = node.state.try_borrow_mut() {
                *state = LazySeqState::Failed;
            }
        }
    }
}

impl<T: Clone + 'static> Seqable for LazySeq<T> {
    type Item = T;

    fn to_seq(&self) -> Seq<T> {
        Seq::Lazy(self.clone())
    }

    fn seq(&self) -> Option<Seq<T>> {
        self.realize()
    }
}

impl<T: Clone + 'static> Sequential for LazySeq<T> {
    fn first(&self) -> Option<T> {
        self.realize().and_then(|s| s.first())
    }

    fn rest(&self) -> Seq<T> {
        match self.realize() {
            Some(s) => s.rest(),
            None => Seq::empty(),
        }
    }

    fn next(&self) -> Option<Seq<T>> {
        self.realize().and_then(|s| s.next())
    }

    /// Prepends without forcing this sequence.
    fn cons(&self, x: T) -> Seq<T> {
        Seq::Cons(Cons::new(x, Some(Seq::Lazy(self.clone()))))
    }

    fn count(&self) -> Result<usize> {
        match self.realize() {
            Some(s) => s.count(),
            None => Ok(0),
        }
    }

    fn is_empty(&self) -> bool {
        self.realize().is_none()
    }
}

impl<T> Meta for LazySeq<T> {
    fn meta(&self) -> Option<&Rc<MetaMap>> {
        self.meta.as_ref()
    }

    /// The copy shares this sequence's memo cell.
    fn with_meta(&self, meta: Option<Rc<MetaMap>>) -> Self {
        LazySeq {
            state: Rc::clone(&self.state),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_thunk_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let ls = LazySeq::new(move || {
            counter.set(counter.get() + 1);
            Seq::list(vec![1, 2])
        });

        assert!(!ls.is_realized());
        assert_eq!(calls.get(), 0);
        for _ in 0..3 {
            assert_eq!(ls.first(), Some(1));
        }
        assert_eq!(ls.count(), Ok(2));
        assert_eq!(calls.get(), 1);
        assert!(ls.is_realized());
    }

    #[test]
    fn test_nested_lazy_is_flattened() {
        let innermost = LazySeq::new(|| Seq::list(vec![42]));
        let middle = LazySeq::new(move || Seq::Lazy(innermost));
        let outer = LazySeq::new(move || Seq::Lazy(middle));

        let realized = outer.realize().unwrap();
        assert!(!matches!(realized, Seq::Lazy(_)));
        assert_eq!(realized.first(), Some(42));
        assert!(matches!(outer.cached(), Some(Some(Seq::List(_)))));
    }

    #[test]
    fn test_intermediate_nodes_are_memoized() {
        let middle = LazySeq::new(|| Seq::list(vec![1]));
        let shared = middle.clone();
        let outer = LazySeq::new(move || Seq::Lazy(middle));

        outer.realize();
        assert!(shared.is_realized());
        assert_eq!(shared.first(), Some(1));
    }

    #[test]
    fn test_empty_result() {
        let ls: LazySeq<i32> = LazySeq::new(|| Seq::empty());
        assert!(ls.is_empty());
        assert_eq!(ls.first(), None);
        assert!(ls.next().is_none());
        assert!(matches!(ls.rest(), Seq::Empty(_)));
        assert_eq!(ls.count(), Ok(0));
        assert!(matches!(ls.cached(), Some(None)));
    }

    #[test]
    fn test_try_new_requires_exactly_one_source() {
        assert!(LazySeq::<i32>::try_new(None, None).is_err());

        let thunk: Thunk<i32> = Box::new(|| Seq::list(vec![2]));
        assert!(LazySeq::try_new(Some(Seq::list(vec![1])), Some(thunk)).is_err());

        let from_seq = LazySeq::try_new(Some(Seq::list(vec![1])), None).unwrap();
        assert!(from_seq.is_realized());
        assert_eq!(from_seq.first(), Some(1));
    }

    #[test]
    fn test_reentrant_force_sees_empty() {
        let slot: Rc<RefCell<Option<LazySeq<i32>>>> = Rc::new(RefCell::new(None));
        let inner_slot = Rc::clone(&slot);
        let ls = LazySeq::new(move || {
            let me = inner_slot.borrow().clone();
            let seen = me.map(|s| s.is_empty());
            assert_eq!(seen, Some(true));
            Seq::list(vec![1])
        });
        *slot.borrow_mut() = Some(ls.clone());

        assert_eq!(ls.first(), Some(1));
        // Break the cycle through the slot
        slot.borrow_mut().take();
    }

    #[test]
    fn test_panicking_thunk_poisons_node() {
        let ls: LazySeq<i32> = LazySeq::new(|| panic!("thunk failed"));
        assert!(catch_unwind(AssertUnwindSafe(|| ls.first())).is_err());
        assert!(matches!(*ls.state.borrow(), LazySeqState::Failed));
        assert!(!ls.is_realized());
        assert!(ls.cached().is_none());

        // Later forces fail too instead of reporting an empty seq
        assert!(catch_unwind(AssertUnwindSafe(|| ls.count())).is_err());
        assert!(catch_unwind(AssertUnwindSafe(|| ls.is_empty())).is_err());
    }

    #[test]
    fn test_panicking_nested_thunk_poisons_chain() {
        let inner: LazySeq<i32> = LazySeq::new(|| panic!("inner failed"));
        let shared = inner.clone();
        let outer = LazySeq::new(move || Seq::Lazy(inner));
        assert!(catch_unwind(AssertUnwindSafe(|| outer.realize())).is_err());
        assert!(matches!(*outer.state.borrow(), LazySeqState::Failed));
        assert!(matches!(*shared.state.borrow(), LazySeqState::Failed));
    }

    #[test]
    fn test_cons_does_not_force() {
        let ls = LazySeq::new(|| Seq::list(vec![2]));
        let s = ls.cons(1);
        assert!(!ls.is_realized());
        assert_eq!(s.first(), Some(1));
        assert!(!ls.is_realized());
    }
}
