// lazyseq-core - Free functions over the seq contract
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Free functions over the seq contract.
//!
//! Everything here talks to collections only through [`Seqable`],
//! [`Sequential`] and [`Conjable`]; the concrete node behind a value is
//! chosen by [`Seq`]'s dispatch.
//!
//! [`Seqable`]: crate::seq::Seqable
//! [`Sequential`]: crate::seq::Sequential
//! [`Conjable`]: crate::seq::Conjable
//! [`Seq`]: crate::seq::Seq

mod collections;
mod eager_sequences;
mod laziness;
mod sequences;

pub use collections::{conj, cons, count, empty, ffirst, first, is_empty, next, rest, seq, sequence};
pub use eager_sequences::{every, into, reduce};
pub use laziness::{doall, dorun, is_realized, iterate, lazy_seq};
pub use sequences::{concat, filter, map, take};
