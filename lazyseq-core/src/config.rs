// lazyseq-core - Print settings
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Thread-local print settings used by the `Display` and `Debug` impls.

use std::cell::Cell;

/// Element limit applied to lazy and infinite sequences when no print length is set.
pub const DEFAULT_LAZY_PRINT_LENGTH: usize = 32;

thread_local! {
    /// Maximum number of elements to print in a sequence.
    /// None means unlimited for eager sequences; lazy ones fall back to
    /// [`DEFAULT_LAZY_PRINT_LENGTH`].
    static PRINT_LENGTH: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Get the current print-length setting.
pub fn get_print_length() -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.get())
}

/// Set the print-length setting. Returns the previous value.
pub fn set_print_length(len: Option<usize>) -> Option<usize> {
    PRINT_LENGTH.with(|pl| pl.replace(len))
}
