//! Word-occupancy bitmap.
//!
//! Wire format:
//! ```text
//! [2 bytes] n_bytes (little-endian u16)
//! [n_bytes] bit-vector, bit i = word i, LSB-first within each byte
//! ```
//!
//! A set bit marks a word inside an allocated block; a clear bit marks a
//! word inside a hole. Trailing bits past the arena capacity are zero.
//! A 65535-word arena needs 8192 bytes, so the length always fits in
//! the header.

use wordheap_arena::BlockTable;

use crate::error::BitmapError;

const HEADER_LEN: usize = 2;

/// One bit per arena word, set when the word is allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    bits: Vec<u8>,
    words: usize,
}

impl Bitmap {
    /// Build the bitmap for every word covered by `table`.
    pub fn from_table(table: &BlockTable) -> Self {
        let words = table.capacity().get();
        let mut bits = vec![0u8; words.div_ceil(8)];
        for (offset, block) in table.iter().filter(|(_, b)| !b.is_hole) {
            let start = offset.get();
            for word in start..start + block.size.get() {
                bits[word / 8] |= 1 << (word % 8);
            }
        }
        Self { bits, words }
    }

    /// Number of words described (the arena capacity).
    ///
    /// A decoded bitmap does not know the exact capacity and reports
    /// `8 * byte_len()`.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Length of the bit-vector in bytes.
    pub fn byte_len(&self) -> usize {
        self.bits.len()
    }

    /// Whether `word` lies inside an allocated block.
    ///
    /// Words past the end of the bitmap report `false`.
    pub fn is_allocated(&self, word: usize) -> bool {
        word < self.words && self.bits[word / 8] & (1 << (word % 8)) != 0
    }

    /// Number of allocated words.
    pub fn allocated_words(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// The packed bit-vector without its header.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Serialize with the 2-byte little-endian length header.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.bits.len());
        buf.extend_from_slice(&(self.bits.len() as u16).to_le_bytes());
        buf.extend_from_slice(&self.bits);
        buf
    }

    /// Parse a buffer produced by [`encode`](Self::encode).
    ///
    /// Bytes past the declared length are ignored.
    pub fn decode(buf: &[u8]) -> Result<Self, BitmapError> {
        let Some((header, rest)) = buf.split_first_chunk::<HEADER_LEN>() else {
            return Err(BitmapError::Truncated {
                expected: HEADER_LEN,
                found: buf.len(),
            });
        };
        let len = u16::from_le_bytes(*header) as usize;
        if rest.len() < len {
            return Err(BitmapError::Truncated {
                expected: HEADER_LEN + len,
                found: buf.len(),
            });
        }
        Ok(Self {
            bits: rest[..len].to_vec(),
            words: len * 8,
        })
    }
}
