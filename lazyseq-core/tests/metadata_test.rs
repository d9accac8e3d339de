// lazyseq-core - Metadata integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for metadata on sequences.
//!
//! Tests for: meta, with_meta, keyword keys, metadata through prepend

mod common;

use std::rc::Rc;

use common::{Seq, Sequential};
use lazyseq_core::{Keyword, LazySeq, Meta, MetaMap, PersistentList, cons, empty, lazy_seq};

fn doc(text: &str) -> Option<Rc<MetaMap>> {
    Some(Rc::new(MetaMap::unit(Keyword::new("doc"), text.to_string())))
}

fn doc_of<T: Clone>(s: &Seq<T>) -> Option<String> {
    s.meta().and_then(|m| m.get(&Keyword::new("doc")).cloned())
}

// =============================================================================
// meta / with_meta
// =============================================================================

#[test]
fn test_meta_none_by_default() {
    assert!(Seq::<i32>::empty().meta().is_none());
    assert!(Seq::list(vec![1]).meta().is_none());
    assert!(lazy_seq(|| Seq::list(vec![1])).meta().is_none());
}

#[test]
fn test_with_meta_on_every_kind() {
    let kinds: Vec<Seq<i64>> = vec![
        Seq::empty(),
        Seq::list(vec![1, 2]),
        cons(0, &common::Buffer::from(vec![1])),
        common::Buffer::from(vec![1, 2]).into(),
        lazy_seq(|| Seq::list(vec![1])),
        common::naturals(),
    ];
    for s in kinds {
        let tagged = s.with_meta(doc("tagged"));
        assert_eq!(doc_of(&tagged), Some("tagged".to_string()), "{}", s.kind());
        assert!(s.meta().is_none());
    }
}

#[test]
fn test_with_meta_keeps_elements() {
    let s = Seq::list(vec![1, 2, 3]);
    let tagged = s.with_meta(doc("numbers"));
    assert_eq!(tagged, s);
    assert_seq!(tagged, [1, 2, 3]);
}

#[test]
fn test_with_meta_none_clears() {
    let tagged = Seq::list(vec![1]).with_meta(doc("x"));
    assert!(tagged.with_meta(None).meta().is_none());
}

// =============================================================================
// Metadata through construction
// =============================================================================

#[test]
fn test_list_prepend_keeps_meta() {
    let tagged = Seq::list(vec![2, 3]).with_meta(doc("list"));
    let longer = cons(1, &tagged);
    assert_eq!(doc_of(&longer), Some("list".to_string()));
}

#[test]
fn test_list_try_new_inherits_tail_meta() {
    let tail = PersistentList::singleton(2).with_meta(doc("tail"));
    let list = PersistentList::try_new(1, Some(tail), Some(2)).expect("valid");
    assert_eq!(doc_of(&Seq::List(list)), Some("tail".to_string()));
}

#[test]
fn test_cell_cons_drops_meta() {
    let tagged = cons(1, &common::Buffer::from(vec![2])).with_meta(doc("cell"));
    let longer = tagged.cons(0);
    assert!(longer.meta().is_none());
}

#[test]
fn test_empty_drops_meta() {
    let tagged = Seq::list(vec![1]).with_meta(doc("x"));
    assert!(empty(&tagged).meta().is_none());
}

#[test]
fn test_lazy_with_meta_shares_memo() {
    let original = LazySeq::new(|| Seq::list(vec![1]));
    let tagged = original.with_meta(doc("lazy"));
    assert_eq!(tagged.first(), Some(1));
    assert!(original.is_realized());
}

// =============================================================================
// Keywords
// =============================================================================

#[test]
fn test_keyword_keys_are_interned() {
    let a = Keyword::with_namespace("seq", "source");
    let b = Keyword::parse("seq/source");
    assert_eq!(a, b);
    assert_eq!(a.to_string(), ":seq/source");
    assert_eq!(b.namespace(), Some("seq"));
    assert_eq!(b.name(), "source");
}
