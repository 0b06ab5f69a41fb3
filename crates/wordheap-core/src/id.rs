//! Strongly-typed word offsets, word counts and byte addresses.
//!
//! Block metadata is stored in 16-bit fields, so both offsets and sizes
//! are `u16` newtypes. Conversions to `usize` are lossless; conversions
//! from `usize` are checked.

use std::fmt;

/// Largest arena the block table can describe, in words.
///
/// `initialize` clamps larger requests to this value.
pub const MAX_ARENA_WORDS: usize = u16::MAX as usize;

/// A word-granular offset from the start of the arena.
///
/// Block table entries are keyed by their starting `WordOffset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordOffset(pub u16);

impl WordOffset {
    /// Offset of the first word in the arena.
    pub const ZERO: Self = Self(0);

    /// The offset as a `usize` index.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Checked conversion from a `usize` word index.
    ///
    /// Returns `None` if `value` does not fit in 16 bits.
    pub fn from_usize(value: usize) -> Option<Self> {
        u16::try_from(value).ok().map(Self)
    }

    /// The offset `len` words past `self`, or `None` on overflow.
    pub fn checked_add(self, len: WordCount) -> Option<Self> {
        self.0.checked_add(len.0).map(Self)
    }
}

impl fmt::Display for WordOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for WordOffset {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// A size measured in arena words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordCount(pub u16);

impl WordCount {
    /// The size as a `usize`.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Whether this is a zero-word size.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked conversion from a `usize` word count.
    ///
    /// Returns `None` if `value` does not fit in 16 bits.
    pub fn from_usize(value: usize) -> Option<Self> {
        u16::try_from(value).ok().map(Self)
    }

    /// Number of words needed to hold `bytes` bytes, rounding up.
    ///
    /// Returns the count as a `usize` so callers can detect requests
    /// that exceed the 16-bit size field. `word_size` must be non-zero.
    pub fn words_for_bytes(bytes: usize, word_size: usize) -> usize {
        bytes.div_ceil(word_size)
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for WordCount {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// An absolute byte address inside an arena.
///
/// Computed as `arena_base + offset * word_size`, where `arena_base` is the
/// address of the arena's first byte. An `Address` is only meaningful for
/// the arena instance that produced it; after `shutdown` or a fresh
/// `initialize` it must not be reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub usize);

impl Address {
    /// The raw address value.
    pub fn get(self) -> usize {
        self.0
    }

    /// Byte distance from `base` to `self`, or `None` if `self` lies below it.
    pub fn offset_from(self, base: Address) -> Option<usize> {
        self.0.checked_sub(base.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<usize> for Address {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
