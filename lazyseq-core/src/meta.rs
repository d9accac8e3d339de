// lazyseq-core - Metadata capability
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Optional metadata carried by every node kind.
//!
//! Metadata is opaque to the sequence machinery: it never affects equality,
//! counting or traversal, and `with_meta` always returns a new value sharing
//! the original's structure.
//!
//! Keys are interned [`Keyword`]s and values are plain strings. Annotations
//! such as `:doc` or `:source` are all this crate attaches, so the map is not
//! generic over its value type.

use std::rc::Rc;

use im::OrdMap;

use crate::keyword::Keyword;

/// Metadata map: keyword keys to string annotations.
pub type MetaMap = OrdMap<Keyword, String>;

/// Capability to read and replace attached metadata.
pub trait Meta: Sized {
    /// The attached metadata, if any.
    fn meta(&self) -> Option<&Rc<MetaMap>>;

    /// Return a copy of this value carrying `meta` instead.
    fn with_meta(&self, meta: Option<Rc<MetaMap>>) -> Self;
}
