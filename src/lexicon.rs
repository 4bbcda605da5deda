// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loaded, read-only lexicon: rank lookup and word extraction.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::format::{self, read_exact_or_io_error, Header, BLOCKING_FACTOR, MAX_WORD_LEN};

/// A lexicon loaded from its serialized form.
///
/// Owns the bucket-pointer table (decoded to host order once, at load time)
/// and the body bytes (head + delta records), and answers `locate`/`extract`
/// queries against them without further allocation.
pub struct Lexicon {
    buckets: Vec<u32>,
    body: Vec<u8>,
    count: u32,
}

impl Lexicon {
    /// Reads a serialized lexicon from `r`.
    pub fn load<R: Read>(r: &mut R) -> Result<Self> {
        let header = Header::read(r)?;
        let num_blocks = format::num_blocks(header.count) as usize;

        let mut table_bytes = vec![0u8; num_blocks * 4];
        read_exact_or_io_error(r, &mut table_bytes)?;
        let buckets = table_bytes
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes(c.try_into().unwrap()))
            .collect();

        let mut body = vec![0u8; header.body_size as usize];
        read_exact_or_io_error(r, &mut body)?;

        Ok(Lexicon {
            buckets,
            body,
            count: header.count,
        })
    }

    /// Reads a serialized lexicon from a file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mut r = BufReader::new(file);
        Self::load(&mut r)
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> u32 {
        self.count
    }

    /// Whether the lexicon holds no words.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of blocks (buckets) the words are partitioned into.
    pub fn block_count(&self) -> u32 {
        self.buckets.len() as u32
    }

    /// Total size of the body in bytes (head + delta records, excluding the
    /// file header and bucket table).
    pub fn body_size(&self) -> u32 {
        self.body.len() as u32
    }

    /// Number of words stored in block `bkt`: [`BLOCKING_FACTOR`] for every
    /// block but the last, which may be partially filled.
    pub(crate) fn block_len(&self, bkt: u32) -> u32 {
        if bkt + 1 == self.buckets.len() as u32 {
            let rem = self.count % BLOCKING_FACTOR;
            if rem != 0 {
                return rem;
            }
        }
        BLOCKING_FACTOR
    }

    /// Returns the head word of block `bkt`, or an empty slice if the body
    /// is too short to hold a well-formed head record there (malformed
    /// input past the trusted header, see module docs).
    pub(crate) fn head_word(&self, bkt: u32) -> &[u8] {
        let off = self.buckets[bkt as usize] as usize;
        format::read_head(&self.body, off).map_or(&[][..], |(w, _)| w)
    }

    /// Index of the first block whose head word is strictly greater than
    /// `word`; equivalently, the number of blocks whose head is `<= word`.
    pub(crate) fn find_bkt(&self, word: &[u8]) -> u32 {
        let (mut low, mut high) = (0u32, self.buckets.len() as u32);
        while low < high {
            let mid = low + (high - low) / 2;
            let head = self.head_word(mid);
            if format::word_cmp(word, head) == std::cmp::Ordering::Less {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        low
    }

    /// Returns the 1-based rank of `word`, or 0 if it is not present.
    ///
    /// A body corrupted past a point that would otherwise be reachable by
    /// this scan (truncated mid-record, or a record pointing past the end
    /// of the body) is treated the same as "not present" rather than
    /// panicking: every read here goes through [`format::read_head`] /
    /// [`format::read_delta`], which never index out of bounds.
    pub fn locate(&self, word: &[u8]) -> u32 {
        if word.is_empty() || word.len() > MAX_WORD_LEN {
            return 0;
        }
        let bkt = self.find_bkt(word);
        if bkt == 0 {
            return 0;
        }
        let bkt = bkt - 1;

        let off = self.buckets[bkt as usize] as usize;
        let Some((head, mut p)) = format::read_head(&self.body, off) else {
            return 0;
        };
        if head == word {
            return bkt * BLOCKING_FACTOR + 1;
        }

        let mut scratch = [0u8; MAX_WORD_LEN];
        scratch[..head.len()].copy_from_slice(head);
        let block_len = self.block_len(bkt);

        for pos_in_block in 1..block_len {
            let Some((pref, suffix, next_p)) = format::read_delta(&self.body, p) else {
                return 0;
            };
            p = next_p;
            if pref + suffix.len() > MAX_WORD_LEN {
                return 0;
            }
            scratch[pref..pref + suffix.len()].copy_from_slice(suffix);
            let cur_len = pref + suffix.len();

            match format::word_cmp(&scratch[..cur_len], word) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => return bkt * BLOCKING_FACTOR + pos_in_block + 1,
                std::cmp::Ordering::Greater => return 0,
            }
        }
        0
    }

    /// Decodes the word at `rank` (1-based) into `out`, returning its
    /// length, or 0 if `rank` is out of range or the body is malformed.
    pub fn extract_into(&self, rank: u32, out: &mut [u8; MAX_WORD_LEN]) -> usize {
        if rank == 0 || rank > self.count {
            return 0;
        }
        let pos = rank - 1;
        let bkt = pos / BLOCKING_FACTOR;
        let rest = pos % BLOCKING_FACTOR;

        let off = self.buckets[bkt as usize] as usize;
        let Some((head, mut p)) = format::read_head(&self.body, off) else {
            return 0;
        };
        out[..head.len()].copy_from_slice(head);
        let mut cur_len = head.len();

        for _ in 0..rest {
            let Some((pref, suffix, next_p)) = format::read_delta(&self.body, p) else {
                return 0;
            };
            p = next_p;
            if pref + suffix.len() > MAX_WORD_LEN {
                return 0;
            }
            out[pref..pref + suffix.len()].copy_from_slice(suffix);
            cur_len = pref + suffix.len();
        }
        cur_len
    }

    /// Decodes the word at `rank` (1-based), or `None` if out of range.
    pub fn extract(&self, rank: u32) -> Option<Vec<u8>> {
        let mut buf = [0u8; MAX_WORD_LEN];
        let len = self.extract_into(rank, &mut buf);
        if len == 0 {
            None
        } else {
            Some(buf[..len].to_vec())
        }
    }

    pub(crate) fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    pub(crate) fn body(&self) -> &[u8] {
        &self.body
    }

    /// Iterates over every word, in ascending order.
    pub fn iter(&self) -> crate::iter::LexiconIter<'_> {
        crate::iter::LexiconIter::from_start(self)
    }

    /// Iterates starting at the first word `>= word`.
    pub fn iter_from_word(&self, word: &[u8]) -> crate::iter::LexiconIter<'_> {
        crate::iter::LexiconIter::from_word(self, word)
    }

    /// Iterates starting at `rank` (1-based).
    pub fn iter_from_rank(&self, rank: u32) -> crate::iter::LexiconIter<'_> {
        crate::iter::LexiconIter::from_rank(self, rank)
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = Vec<u8>;
    type IntoIter = crate::iter::LexiconIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
