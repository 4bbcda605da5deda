// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A blocked front-coded lexicon: a sorted list of byte strings compressed
//! by sharing prefixes within small blocks, with O(log n) rank lookup and
//! O(1)-amortized word extraction.
//!
//! ```text
//! Encoder  ──add()×N──▶  dump()  ──▶  [bytes] ──▶  load()  ──▶  Lexicon
//!                                                                 │
//!                                              locate() / extract() / iter()
//! ```
//!
//! ## Example
//!
//! ```
//! use halva::{Encoder, Lexicon};
//!
//! let mut enc = Encoder::new();
//! enc.add(b"greenish").unwrap();
//! enc.add(b"greenness").unwrap();
//! enc.add(b"greens").unwrap();
//!
//! let mut bytes = Vec::new();
//! enc.dump(&mut bytes).unwrap();
//!
//! let lex = Lexicon::load(&mut &bytes[..]).unwrap();
//! assert_eq!(lex.locate(b"greens"), 3);
//! assert_eq!(lex.extract(3).as_deref(), Some(b"greens".as_slice()));
//! ```

mod encoder;
mod error;
mod format;
mod iter;
mod lexicon;

pub use encoder::Encoder;
pub use error::{Error, Result};
pub use format::{BLOCKING_FACTOR, MAGIC, MAX_SERIALIZED_SIZE, MAX_WORD_LEN, VERSION};
pub use iter::LexiconIter;
pub use lexicon::Lexicon;
