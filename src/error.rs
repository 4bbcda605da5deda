// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy shared by the encoder and decoder.
//!
//! There is no hierarchy between variants: each one corresponds to exactly
//! one failure condition described by the format, and none of them is
//! recoverable by retrying inside the library.

use std::fmt;

/// Everything that can go wrong while building, serializing, or loading a
/// lexicon.
#[derive(Debug)]
pub enum Error {
    /// Attempt to add the empty string, or a word longer than
    /// [`MAX_WORD_LEN`](crate::format::MAX_WORD_LEN).
    Word,
    /// A word was added that is not strictly greater than the previous one
    /// (includes duplicates).
    Order,
    /// `add` was called after `dump` without an intervening `clear`.
    Freezed,
    /// Serializing the lexicon built so far would exceed the size guardrail.
    TooBig,
    /// The magic identifier at the start of a file did not match.
    Magic,
    /// The format version did not match the version this crate writes.
    Version,
    /// A read or write failed, including short reads/writes.
    Io(std::io::Error),
    /// A buffer could not be grown (allocator returned an error).
    NoMem,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Word => write!(f, "attempt to add the empty string or a too long word"),
            Error::Order => write!(f, "word added out of order"),
            Error::Freezed => write!(f, "attempt to add a word to a freezed lexicon"),
            Error::TooBig => write!(f, "lexicon has grown too large"),
            Error::Magic => write!(f, "magic identifier mismatch"),
            Error::Version => write!(f, "version mismatch"),
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::NoMem => write!(f, "out of memory"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
