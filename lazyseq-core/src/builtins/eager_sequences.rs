// lazyseq-core - Strict folds
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! reduce, into, every

use crate::seq::{Conjable, Seqable, Sequential};

/// Strict left fold over every element of `coll`.
///
/// Never returns on an unbounded sequence.
pub fn reduce<S, A, F>(mut f: F, init: A, coll: &S) -> A
where
    S: Seqable + ?Sized,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = init;
    let mut current = coll.seq();
    while let Some(s) = current {
        let Some(x) = s.first() else {
            break;
        };
        acc = f(acc, x);
        current = s.next();
    }
    acc
}

/// Fold `coll` into `target` with `conj`.
///
/// Order is preserved into a buffer and reversed into a seq.
pub fn into<C, S>(target: C, coll: &S) -> C
where
    C: Conjable,
    S: Seqable<Item = C::Item> + ?Sized,
{
    reduce(|acc: C, x| acc.conj(x), target, coll)
}

/// True when every element satisfies `pred`; stops at the first failure.
pub fn every<S, P>(pred: P, coll: &S) -> bool
where
    S: Seqable + ?Sized,
    P: Fn(&S::Item) -> bool,
{
    let mut current = coll.seq();
    while let Some(s) = current {
        match s.first() {
            Some(x) if pred(&x) => current = s.next(),
            Some(_) => return false,
            None => break,
        }
    }
    true
}
