// lazyseq-core - Sequence algorithm integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for map, filter, take, concat, reduce and into.

mod common;

use common::{Buffer, Seq, Seqable, Sequential, counting, items, naturals};
use lazyseq_core::{
    ArraySeq, Error, concat, cons, count, every, filter, into, iterate, map, reduce, take,
};

// =============================================================================
// Order and direction of conj
// =============================================================================

#[test]
fn test_into_buffer_preserves_order() {
    let source = ArraySeq::new(im::vector![1, 2, 3]);
    let out = into(Buffer::new(), &source);
    assert_eq!(out.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_into_seq_reverses() {
    let out = into(Seq::empty(), &Buffer::from(vec![1, 2, 3]));
    assert_seq!(out, [3, 2, 1]);
}

#[test]
fn test_reduce_with_cons_reverses() {
    let out = reduce(
        |acc: Seq<i32>, x| cons(x, &acc),
        Seq::empty(),
        &Buffer::from(vec![1, 2, 3]),
    );
    assert_seq!(out, [3, 2, 1]);
    assert!(matches!(out, Seq::List(_)));
}

#[test]
fn test_reduce_empty_returns_init() {
    let empty: Buffer<i32> = Buffer::new();
    assert_eq!(reduce(|acc, x| acc + x, 7, &empty), 7);
}

// =============================================================================
// take
// =============================================================================

#[test]
fn test_take_prefix() {
    let out = into(Buffer::new(), &take(3, &Buffer::from(vec![1, 2, 3, 4, 5, 6, 7])));
    assert_eq!(out.to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_take_zero_never_forces() {
    let (f, calls) = counting(|x: i64| x);
    let source = map(f, &naturals());
    let taken = take(0, &source);
    assert!(taken.seq().is_none());
    assert!(!lazyseq_core::is_realized(&source));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_take_forces_only_what_it_yields() {
    let (f, calls) = counting(|x: i64| x * 2);
    let taken = take(3, &map(f, &naturals()));
    assert_seq!(taken, [0, 2, 4]);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_take_count() {
    assert_eq!(take(4, &naturals()).count(), Ok(4));
    assert_eq!(count(&take(4, &Buffer::from(vec![1, 2]))), Ok(2));
}

// =============================================================================
// filter
// =============================================================================

#[test]
fn test_filter_even() {
    let out = into(
        Buffer::new(),
        &filter(|x: &i32| x % 2 == 0, &Buffer::from(vec![1, 2, 3, 4, 5])),
    );
    assert_eq!(out.to_vec(), vec![2, 4]);
}

#[test]
fn test_filter_infinite_source() {
    let evens = filter(|x: &i64| x % 2 == 0, &naturals());
    assert_seq!(take(4, &evens), [0, 2, 4, 6]);
}

#[test]
fn test_filter_consumes_only_up_to_match() {
    let (f, calls) = counting(|x: i64| x);
    let big = filter(|x: &i64| *x >= 10, &map(f, &naturals()));
    assert_eq!(big.first(), Some(10));
    assert_eq!(calls.get(), 11);
}

#[test]
fn test_filter_long_rejected_run() {
    // A long run of rejections is skipped without deep recursion
    let sparse = filter(|x: &i64| x % 2_000 == 1_999, &naturals());
    assert_eq!(sparse.first(), Some(1_999));
}

// =============================================================================
// map
// =============================================================================

#[test]
fn test_map_over_buffer() {
    let doubled = map(|x: i32| x * 2, &Buffer::from(vec![1, 2, 3]));
    assert_seq!(doubled, [2, 4, 6]);
}

#[test]
fn test_map_empty() {
    let mapped = map(|x: i32| x + 1, &Seq::<i32>::empty());
    assert!(mapped.seq().is_none());
    assert_eq!(mapped.count(), Ok(0));
}

#[test]
fn test_map_chain_is_shared() {
    let (f, calls) = counting(|x: i32| x + 1);
    let mapped = map(f, &Buffer::from(vec![1, 2, 3]));
    assert_eq!(items(&mapped), vec![2, 3, 4]);
    assert_eq!(items(&mapped), vec![2, 3, 4]);
    assert_eq!(calls.get(), 3);
}

// =============================================================================
// concat
// =============================================================================

#[test]
fn test_concat_mixed_kinds() {
    let joined = concat(vec![
        Buffer::from(vec![1, 2]).to_seq(),
        Seq::list(vec![3]),
        map(|x: i32| x * 10, &Seq::list(vec![4, 5])),
    ]);
    assert_seq!(joined, [1, 2, 3, 40, 50]);
}

#[test]
fn test_concat_is_deferred() {
    let (f, calls) = counting(|x: i32| x);
    let joined = concat(vec![map(f, &Seq::list(vec![1, 2]))]);
    assert_eq!(calls.get(), 0);
    assert_eq!(joined.first(), Some(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_concat_infinite_first_argument() {
    let joined = concat(vec![naturals(), Seq::list(vec![-1])]);
    assert_seq!(take(3, &joined), [0, 1, 2]);
}

// =============================================================================
// Generators
// =============================================================================

#[test]
fn test_iterate_take_five() {
    let out = into(Buffer::new(), &take(5, &iterate(|x: &i32| x + 1, 0)));
    assert_eq!(out.to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_iterate_count_is_error() {
    assert_eq!(
        iterate(|x: &i32| x + 1, 0).count(),
        Err(Error::InfiniteSequence { kind: "iterate" })
    );
}

#[test]
fn test_count_reaching_iterate_is_error() {
    let prefixed = cons(-1, &naturals());
    assert!(matches!(prefixed.count(), Err(Error::InfiniteSequence { .. })));
}

#[test]
fn test_every() {
    assert!(every(|x: &i32| *x > 0, &Buffer::from(vec![1, 2, 3])));
    assert!(!every(|x: &i64| *x < 3, &naturals()));
}
