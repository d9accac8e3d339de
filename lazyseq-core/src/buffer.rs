// lazyseq-core - Native buffer adapter
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Adapter exposing an indexable, growable buffer to the seq contract.
//!
//! `Buffer` wraps an `im::Vector`. Its seq view is an [`ArraySeq`] over the
//! same storage, and `conj` appends by returning a new buffer, so repeated
//! `conj` inside a fold never disturbs buffers produced earlier.

use im::Vector;

use crate::seq::{ArraySeq, Conjable, Seq, Seqable};

/// An append-capable buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer<T: Clone>(Vector<T>);

impl<T: Clone> Buffer<T> {
    pub fn new() -> Self {
        Buffer(Vector::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// A new buffer with `x` appended; `self` is unchanged.
    pub fn push(&self, x: T) -> Self {
        let mut items = self.0.clone();
        items.push_back(x);
        Buffer(items)
    }

    pub fn as_vector(&self) -> &Vector<T> {
        &self.0
    }

    pub fn into_vector(self) -> Vector<T> {
        self.0
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.iter().cloned().collect()
    }
}

impl<T: Clone> Default for Buffer<T> {
    fn default() -> Self {
        Buffer::new()
    }
}

impl<T: Clone + 'static> Seqable for Buffer<T> {
    type Item = T;

    fn to_seq(&self) -> Seq<T> {
        Seq::Array(ArraySeq::new(self.0.clone()))
    }
}

impl<T: Clone> Conjable for Buffer<T> {
    type Item = T;

    fn conj(&self, x: T) -> Self {
        self.push(x)
    }
}

impl<T: Clone> From<Vec<T>> for Buffer<T> {
    fn from(items: Vec<T>) -> Self {
        Buffer(items.into_iter().collect())
    }
}

impl<T: Clone> From<Vector<T>> for Buffer<T> {
    fn from(items: Vector<T>) -> Self {
        Buffer(items)
    }
}

impl<T: Clone> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Buffer(iter.into_iter().collect())
    }
}

impl<T: Clone + 'static> From<Buffer<T>> for Seq<T> {
    fn from(buffer: Buffer<T>) -> Self {
        Seq::Array(ArraySeq::new(buffer.0))
    }
}
