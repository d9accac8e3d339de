// lazyseq-core - Printing sequences without forcing them
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Display support.
//!
//! Printing shows only what is already realized: an unforced lazy node or
//! an iterate value that has not been computed prints as `...` and stops
//! the walk. The thread-local print length caps the number of elements;
//! lazy and infinite sequences fall back to
//! [`DEFAULT_LAZY_PRINT_LENGTH`] when no length is set.

use std::fmt;

use crate::config::{DEFAULT_LAZY_PRINT_LENGTH, get_print_length};

use super::Seq;

/// One step of the non-forcing walk
enum Step<T> {
    Item(T, Tail<T>),
    Descend(Seq<T>),
    Unrealized,
    End,
}

enum Tail<T> {
    Next(Seq<T>),
    Unrealized,
    End,
}

fn step<T: Clone + 'static>(node: &Seq<T>) -> Step<T> {
    match node {
        Seq::Empty(_) => Step::End,
        Seq::List(l) => {
            let tail = match l.tail() {
                Some(t) => Tail::Next(Seq::List(t.clone())),
                None => Tail::End,
            };
            Step::Item(l.head().clone(), tail)
        }
        Seq::Cons(c) => {
            let tail = match c.tail() {
                Some(t) => Tail::Next(t.clone()),
                None => Tail::End,
            };
            Step::Item(c.head().clone(), tail)
        }
        Seq::Array(a) => match a.get() {
            Some(x) => Step::Item(x.clone(), Tail::Next(super::Sequential::rest(a))),
            None => Step::End,
        },
        Seq::Lazy(l) => match l.cached() {
            None => Step::Unrealized,
            Some(None) => Step::End,
            Some(Some(s)) => Step::Descend(s),
        },
        Seq::Iterate(i) => match i.realized_value() {
            None => Step::Unrealized,
            Some(x) => {
                let tail = match i.successor() {
                    Some(next) => Tail::Next(Seq::Iterate(next)),
                    None => Tail::Unrealized,
                };
                Step::Item(x, tail)
            }
        },
    }
}

pub(crate) fn write_seq<T, W>(
    f: &mut fmt::Formatter<'_>,
    seq: &Seq<T>,
    write_item: W,
) -> fmt::Result
where
    T: Clone + 'static,
    W: Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
{
    let mut limit = get_print_length();
    let mut written = 0usize;
    let mut current = seq.clone();

    write!(f, "(")?;
    loop {
        if matches!(current, Seq::Lazy(_) | Seq::Iterate(_)) {
            limit.get_or_insert(DEFAULT_LAZY_PRINT_LENGTH);
        }
        let sep = if written == 0 { "" } else { " " };
        match step(&current) {
            Step::End => break,
            Step::Unrealized => {
                write!(f, "{}...", sep)?;
                break;
            }
            Step::Descend(s) => current = s,
            Step::Item(x, tail) => {
                if limit.is_some_and(|max| written >= max) {
                    write!(f, "{}...", sep)?;
                    break;
                }
                write!(f, "{}", sep)?;
                write_item(f, &x)?;
                written += 1;
                match tail {
                    Tail::Next(s) => current = s,
                    Tail::End => break,
                    Tail::Unrealized => {
                        write!(f, " ...")?;
                        break;
                    }
                }
            }
        }
    }
    write!(f, ")")
}

// Node kinds print the same way as the `Seq` wrapping them
macro_rules! impl_fmt_via_seq {
    ($($node:ident),* $(,)?) => {
        $(
            impl<T: fmt::Display + Clone + 'static> fmt::Display for super::$node<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&Seq::from(self.clone()), f)
                }
            }

            impl<T: fmt::Debug + Clone + 'static> fmt::Debug for super::$node<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(&Seq::from(self.clone()), f)
                }
            }
        )*
    };
}

impl_fmt_via_seq!(PersistentList, Cons, ArraySeq, LazySeq, Iterate);

impl fmt::Display for super::EmptySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}
