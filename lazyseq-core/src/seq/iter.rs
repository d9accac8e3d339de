// lazyseq-core - Iterator adapter over sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use super::{Seq, Sequential};

/// Iterator yielding the elements of a sequence.
///
/// Elements are pulled through `first`/`next`, so lazy nodes are forced one
/// at a time as the iterator advances and an infinite sequence yields
/// forever.
pub struct SeqIter<T> {
    current: Option<Seq<T>>,
}

impl<T> SeqIter<T> {
    pub(crate) fn new(current: Option<Seq<T>>) -> Self {
        SeqIter { current }
    }
}

impl<T: Clone + 'static> Iterator for SeqIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.current.take()?;
        let item = node.first()?;
        self.current = Sequential::next(&node);
        Some(item)
    }
}
