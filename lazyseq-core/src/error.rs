// lazyseq-core - Error types for sequence construction and traversal
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for lazyseq.
//!
//! Errors are raised synchronously at the point of violation. Construction
//! errors surface from the `try_new` constructors; counting an infinite
//! sequence fails fast instead of looping.

use thiserror::Error;

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or traversing sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node was built from an invalid combination of parts
    #[error("Cannot construct {kind}: {message}")]
    Construction {
        kind: &'static str,
        message: String,
    },

    /// `count` was called on a sequence that is infinite by construction
    #[error("Cannot count {kind}: sequence is infinite")]
    InfiniteSequence { kind: &'static str },
}

impl Error {
    /// Create a construction error for the given node kind.
    pub fn construction(kind: &'static str, message: impl Into<String>) -> Self {
        Error::Construction {
            kind,
            message: message.into(),
        }
    }

    /// Create an infinite-sequence error for the given node kind.
    pub fn infinite(kind: &'static str) -> Self {
        Error::InfiniteSequence { kind }
    }
}
