// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-order iteration over a loaded lexicon, starting from its first word,
//! a given word, or a given rank.

use crate::format::{MAX_WORD_LEN, BLOCKING_FACTOR};
use crate::lexicon::Lexicon;

/// Borrowing iterator over the words of a [`Lexicon`], in ascending order.
///
/// Decoding word `n` only needs the decoded state of word `n - 1`: each
/// constructor positions the iterator by doing just enough decoding work to
/// reconstruct that state, then [`Iterator::next`] advances one record at a
/// time.
pub struct LexiconIter<'a> {
    lex: &'a Lexicon,
    pos: u32,
    p: usize,
    word: [u8; MAX_WORD_LEN],
    word_len: usize,
    start_rank: u32,
}

impl<'a> LexiconIter<'a> {
    /// Positions at the first word, if any.
    pub fn from_start(lex: &'a Lexicon) -> Self {
        let start_rank = if lex.len() > 0 { 1 } else { 0 };
        LexiconIter {
            lex,
            pos: 0,
            p: 0,
            word: [0; MAX_WORD_LEN],
            word_len: 0,
            start_rank,
        }
    }

    fn exhausted(lex: &'a Lexicon) -> Self {
        LexiconIter {
            lex,
            pos: lex.len(),
            p: 0,
            word: [0; MAX_WORD_LEN],
            word_len: 0,
            start_rank: 0,
        }
    }

    /// Positions at the first word `>= word` (or at the end, if none is).
    pub fn from_word(lex: &'a Lexicon, word: &[u8]) -> Self {
        let bkt = lex.find_bkt(word);
        if bkt == 0 {
            return Self::from_start(lex);
        }
        let bkt = bkt - 1;
        let off = lex.buckets()[bkt as usize] as usize;
        let Some((head, head_end)) = crate::format::read_head(lex.body(), off) else {
            return Self::exhausted(lex);
        };

        if head == word {
            return LexiconIter {
                lex,
                pos: bkt * BLOCKING_FACTOR,
                p: off,
                word: [0; MAX_WORD_LEN],
                word_len: 0,
                start_rank: bkt * BLOCKING_FACTOR + 1,
            };
        }

        let mut word_buf = [0u8; MAX_WORD_LEN];
        word_buf[..head.len()].copy_from_slice(head);
        let mut word_len = head.len();
        let mut p = head_end;
        let block_len = lex.block_len(bkt);

        for pos_in_block in 1..block_len {
            let rec_start = p;
            let Some((pref, suffix, next_p)) = crate::format::read_delta(lex.body(), p) else {
                return Self::exhausted(lex);
            };
            p = next_p;
            if pref + suffix.len() > MAX_WORD_LEN {
                return Self::exhausted(lex);
            }
            word_buf[pref..pref + suffix.len()].copy_from_slice(suffix);
            word_len = pref + suffix.len();

            if crate::format::word_cmp(&word_buf[..word_len], word) == std::cmp::Ordering::Less {
                continue;
            }
            let pos = bkt * BLOCKING_FACTOR + pos_in_block;
            return LexiconIter {
                lex,
                pos,
                p: rec_start,
                word: word_buf,
                word_len,
                start_rank: pos + 1,
            };
        }

        let next_pos = (bkt + 1) * BLOCKING_FACTOR;
        if next_pos >= lex.len() {
            return Self::exhausted(lex);
        }
        LexiconIter {
            lex,
            pos: next_pos,
            p,
            word: [0; MAX_WORD_LEN],
            word_len: 0,
            start_rank: next_pos + 1,
        }
    }

    /// Positions at `rank` (1-based); a `rank` of 0 or past the end yields
    /// an exhausted iterator.
    pub fn from_rank(lex: &'a Lexicon, rank: u32) -> Self {
        if rank == 0 || rank > lex.len() {
            return Self::exhausted(lex);
        }
        let pos = rank - 1;
        let bkt = pos / BLOCKING_FACTOR;
        let rest = pos % BLOCKING_FACTOR;
        let off = lex.buckets()[bkt as usize] as usize;

        if rest == 0 {
            return LexiconIter {
                lex,
                pos,
                p: off,
                word: [0; MAX_WORD_LEN],
                word_len: 0,
                start_rank: rank,
            };
        }

        let Some((head, mut p)) = crate::format::read_head(lex.body(), off) else {
            return Self::exhausted(lex);
        };
        let mut word = [0u8; MAX_WORD_LEN];
        word[..head.len()].copy_from_slice(head);
        let mut word_len = head.len();

        for _ in 0..rest - 1 {
            let Some((pref, suffix, next_p)) = crate::format::read_delta(lex.body(), p) else {
                return Self::exhausted(lex);
            };
            p = next_p;
            if pref + suffix.len() > MAX_WORD_LEN {
                return Self::exhausted(lex);
            }
            word[pref..pref + suffix.len()].copy_from_slice(suffix);
            word_len = pref + suffix.len();
        }

        LexiconIter {
            lex,
            pos,
            p,
            word,
            word_len,
            start_rank: rank,
        }
    }

    /// Rank (1-based) of the first word this iterator will yield, or 0 if
    /// it is already exhausted.
    pub fn start_rank(&self) -> u32 {
        self.start_rank
    }
}

impl<'a> Iterator for LexiconIter<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.pos >= self.lex.len() {
            return None;
        }

        if self.pos % BLOCKING_FACTOR == 0 {
            let (head, next_p) = crate::format::read_head(self.lex.body(), self.p)?;
            self.word[..head.len()].copy_from_slice(head);
            self.word_len = head.len();
            self.p = next_p;
        } else {
            let (pref, suffix, next_p) = crate::format::read_delta(self.lex.body(), self.p)?;
            if pref + suffix.len() > MAX_WORD_LEN {
                return None;
            }
            self.word[pref..pref + suffix.len()].copy_from_slice(suffix);
            self.word_len = pref + suffix.len();
            self.p = next_p;
        }

        self.pos += 1;
        Some(self.word[..self.word_len].to_vec())
    }
}
