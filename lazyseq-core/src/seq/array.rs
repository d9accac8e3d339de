// lazyseq-core - Index view over a shared buffer
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::rc::Rc;

use im::Vector;

use crate::error::Result;
use crate::meta::{Meta, MetaMap};

use super::{Cons, Seq, Seqable, Sequential};

/// A zero-copy view of a buffer starting at `offset`.
///
/// The buffer is never copied or modified: `rest`/`next` produce a view
/// over the same buffer at `offset + 1`. A view is exhausted exactly when
/// `offset == buffer.len()`.
#[derive(Clone)]
pub struct ArraySeq<T> {
    buffer: Vector<T>,
    offset: usize,
    meta: Option<Rc<MetaMap>>,
}

impl<T: Clone> ArraySeq<T> {
    /// A view over the whole buffer.
    pub fn new(buffer: Vector<T>) -> Self {
        ArraySeq::with_offset(buffer, 0)
    }

    /// A view starting at `offset`, clamped to the buffer length.
    pub fn with_offset(buffer: Vector<T>, offset: usize) -> Self {
        let offset = offset.min(buffer.len());
        ArraySeq {
            buffer,
            offset,
            meta: None,
        }
    }

    pub fn buffer(&self) -> &Vector<T> {
        &self.buffer
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The element at the current offset.
    pub fn get(&self) -> Option<&T> {
        self.buffer.get(self.offset)
    }

    /// The view one position further along, if any element remains there.
    fn advance(&self) -> Option<Self> {
        let offset = self.offset + 1;
        (offset < self.buffer.len()).then(|| ArraySeq {
            buffer: self.buffer.clone(),
            offset,
            meta: None,
        })
    }
}

impl<T: Clone + 'static> ArraySeq<T> {
    /// Walks `other` in lock-step against the buffer by index.
    pub fn equiv(&self, other: &Seq<T>) -> bool
    where
        T: PartialEq,
    {
        let mut index = self.offset;
        let mut current = other.seq();
        loop {
            match (self.buffer.get(index), current) {
                (None, None) => return true,
                (Some(x), Some(s)) => {
                    if s.first().as_ref() != Some(x) {
                        return false;
                    }
                    index += 1;
                    current = s.next();
                }
                _ => return false,
            }
        }
    }
}

impl<T: Clone + 'static> Seqable for ArraySeq<T> {
    type Item = T;

    fn to_seq(&self) -> Seq<T> {
        Seq::Array(self.clone())
    }

    fn seq(&self) -> Option<Seq<T>> {
        (!Sequential::is_empty(self)).then(|| Seq::Array(self.clone()))
    }
}

impl<T: Clone + 'static> Sequential for ArraySeq<T> {
    fn first(&self) -> Option<T> {
        self.get().cloned()
    }

    fn rest(&self) -> Seq<T> {
        match self.advance() {
            Some(view) => Seq::Array(view),
            None => Seq::empty(),
        }
    }

    fn next(&self) -> Option<Seq<T>> {
        self.advance().map(Seq::Array)
    }

    fn cons(&self, x: T) -> Seq<T> {
        Seq::Cons(Cons::new(x, Some(Seq::Array(self.clone()))))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.buffer.len() - self.offset)
    }

    fn is_empty(&self) -> bool {
        self.offset >= self.buffer.len()
    }
}

impl<T: Clone> Meta for ArraySeq<T> {
    fn meta(&self) -> Option<&Rc<MetaMap>> {
        self.meta.as_ref()
    }

    fn with_meta(&self, meta: Option<Rc<MetaMap>>) -> Self {
        ArraySeq {
            buffer: self.buffer.clone(),
            offset: self.offset,
            meta,
        }
    }
}
