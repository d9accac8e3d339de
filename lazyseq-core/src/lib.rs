// lazyseq-core - Seq contract, node kinds and lazy algorithms
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # lazyseq-core
//!
//! Clojure-style sequences: a small capability contract ([`Seqable`],
//! [`Sequential`], [`Conjable`], [`Meta`]), a closed set of node kinds
//! behind [`Seq`], and lazy algorithms (`map`, `filter`, `take`, `concat`)
//! that defer all work until an element is requested.
//!
//! Sequences are single-threaded: nodes share structure through `Rc` and
//! memoize through `RefCell`.

pub mod buffer;
pub mod builtins;
pub mod config;
pub mod error;
pub mod keyword;
pub mod meta;
pub mod seq;

pub use buffer::Buffer;
pub use builtins::{
    concat, conj, cons, count, doall, dorun, empty, every, ffirst, filter, first, into, is_empty,
    is_realized, iterate, lazy_seq, map, next, reduce, rest, seq, sequence, take,
};
pub use config::{DEFAULT_LAZY_PRINT_LENGTH, get_print_length, set_print_length};
pub use error::{Error, Result};
pub use keyword::Keyword;
pub use meta::{Meta, MetaMap};
pub use seq::{
    ArraySeq, Conjable, Cons, EmptySeq, Iterate, LazySeq, PersistentList, Seq, SeqIter, Seqable,
    Sequential,
};
