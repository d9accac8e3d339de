// lazyseq-core - Laziness built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Deferred construction: lazy_seq, iterate
//! Forcing: doall, dorun, is_realized

use tracing::trace;

use crate::seq::{Iterate, LazySeq, Seq, Seqable, Sequential};

// ============================================================================
// Construction
// ============================================================================

/// A lazy sequence whose body runs on first access.
pub fn lazy_seq<T: Clone + 'static>(thunk: impl FnOnce() -> Seq<T> + 'static) -> Seq<T> {
    Seq::Lazy(LazySeq::new(thunk))
}

/// The infinite sequence `x, f(x), f(f(x)), ...`.
pub fn iterate<T: Clone + 'static>(f: impl Fn(&T) -> T + 'static, x: T) -> Seq<T> {
    Seq::Iterate(Iterate::new(f, x))
}

// ============================================================================
// Forcing
// ============================================================================

/// Force `coll` and return it. With a limit, forces only that many elements.
///
/// Without a limit this never returns on an infinite sequence.
pub fn doall<T: Clone + 'static>(coll: &Seq<T>, limit: Option<usize>) -> Seq<T> {
    dorun(coll, limit);
    coll.clone()
}

/// Force `coll` for its side effects. With a limit, forces only that many
/// elements.
pub fn dorun<T: Clone + 'static>(coll: &Seq<T>, limit: Option<usize>) {
    let mut current = coll.clone();
    let mut count = 0usize;

    loop {
        if let Some(max) = limit
            && count >= max
        {
            break;
        }
        let Some(s) = current.seq() else {
            break;
        };
        // first() computes pending iterate values
        if s.first().is_none() {
            break;
        }
        count += 1;
        // rest() so the element after the limit stays unforced
        current = s.rest();
    }
    trace!(count, "forced seq elements");
}

/// Whether a deferred node has been forced. Eager nodes are always realized.
pub fn is_realized<T: Clone + 'static>(coll: &Seq<T>) -> bool {
    match coll {
        Seq::Lazy(ls) => ls.is_realized(),
        Seq::Iterate(it) => it.realized_value().is_some(),
        // Non-lazy values are always realized
        _ => true,
    }
}
