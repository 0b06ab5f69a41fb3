//! Arena configuration parameters.

use wordheap_core::{WordCount, MAX_ARENA_WORDS};

/// Configuration for a single arena.
///
/// Word size is fixed for the arena's lifetime. Capacity is requested in
/// words and clamped to [`MAX_ARENA_WORDS`] by [`clamped`](Self::clamped).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Allocation granularity in bytes. Must be non-zero.
    ///
    /// Default: 1.
    pub word_size: usize,

    /// Requested capacity in words.
    pub capacity_words: usize,
}

impl ArenaConfig {
    /// Default word size in bytes.
    pub const DEFAULT_WORD_SIZE: usize = 1;

    /// Create a config with the default word size.
    pub fn new(capacity_words: usize) -> Self {
        Self {
            word_size: Self::DEFAULT_WORD_SIZE,
            capacity_words,
        }
    }

    /// Set the word size.
    pub fn with_word_size(mut self, word_size: usize) -> Self {
        self.word_size = word_size;
        self
    }

    /// Capacity after clamping to the 16-bit size field.
    pub fn clamped(&self) -> WordCount {
        WordCount(self.capacity_words.min(MAX_ARENA_WORDS) as u16)
    }

    /// Capacity of the clamped arena in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.clamped().get() * self.word_size
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
