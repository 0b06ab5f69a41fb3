//! The fixed-size byte buffer backing an allocator.
//!
//! An [`Arena`] is a zero-initialised `Vec<u8>` of `capacity_words *
//! word_size` bytes. It is never resized; the allocator drops it on
//! `shutdown` and builds a fresh one on `initialize`.

use wordheap_core::{Address, WordCount, WordOffset};

use crate::config::ArenaConfig;

/// Owned, word-granular byte storage.
pub struct Arena {
    /// Backing storage, allocated to full capacity at creation.
    data: Vec<u8>,
    word_size: usize,
    capacity_words: WordCount,
}

impl Arena {
    /// Create a zeroed arena sized by `config` (capacity clamped).
    ///
    /// # Panics
    ///
    /// Panics if `config.word_size` is zero. Callers validate the word
    /// size once at construction.
    pub fn new(config: &ArenaConfig) -> Self {
        assert!(config.word_size > 0, "word size must be non-zero");
        let capacity_words = config.clamped();
        Self {
            data: vec![0u8; capacity_words.get() * config.word_size],
            word_size: config.word_size,
            capacity_words,
        }
    }

    /// Address of the first byte.
    pub fn base(&self) -> Address {
        Address(self.data.as_ptr() as usize)
    }

    /// Address of the word at `offset`.
    pub fn address_of(&self, offset: WordOffset) -> Address {
        Address(self.base().get() + offset.get() * self.word_size)
    }

    /// Translate an address back to a word offset.
    ///
    /// Returns `None` if the address lies outside the arena or does not
    /// fall on a word boundary.
    pub fn offset_of(&self, address: Address) -> Option<WordOffset> {
        let bytes = address.offset_from(self.base())?;
        if bytes % self.word_size != 0 {
            return None;
        }
        let words = bytes / self.word_size;
        if words >= self.capacity_words.get() {
            return None;
        }
        WordOffset::from_usize(words)
    }

    /// Shared view of `len` words starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the arena.
    pub fn slice(&self, offset: WordOffset, len: WordCount) -> &[u8] {
        let start = offset.get() * self.word_size;
        let end = start + len.get() * self.word_size;
        &self.data[start..end]
    }

    /// Mutable view of `len` words starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the arena.
    pub fn slice_mut(&mut self, offset: WordOffset, len: WordCount) -> &mut [u8] {
        let start = offset.get() * self.word_size;
        let end = start + len.get() * self.word_size;
        &mut self.data[start..end]
    }

    /// Allocation granularity in bytes.
    pub fn word_size(&self) -> usize {
        self.word_size
    }

    /// Capacity in words.
    pub fn capacity_words(&self) -> WordCount {
        self.capacity_words
    }

    /// Capacity in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(words: usize, word_size: usize) -> Arena {
        Arena::new(&ArenaConfig::new(words).with_word_size(word_size))
    }

    #[test]
    fn new_arena_is_zeroed() {
        let a = arena(16, 4);
        assert_eq!(a.capacity_bytes(), 64);
        assert!(a.slice(WordOffset(0), WordCount(16)).iter().all(|&b| b == 0));
    }

    #[test]
    fn oversized_capacity_is_clamped() {
        let a = arena(100_000, 1);
        assert_eq!(a.capacity_words(), WordCount(u16::MAX));
        assert_eq!(a.capacity_bytes(), u16::MAX as usize);
    }

    #[test]
    fn address_round_trips_through_offset() {
        let a = arena(32, 8);
        let addr = a.address_of(WordOffset(5));
        assert_eq!(addr.get() - a.base().get(), 40);
        assert_eq!(a.offset_of(addr), Some(WordOffset(5)));
    }

    #[test]
    fn offset_of_rejects_misaligned_and_foreign_addresses() {
        let a = arena(32, 8);
        let base = a.base().get();
        assert_eq!(a.offset_of(Address(base + 3)), None);
        assert_eq!(a.offset_of(Address(base + 32 * 8)), None);
        assert_eq!(a.offset_of(Address(base.wrapping_sub(8))), None);
    }

    #[test]
    fn slice_mut_writes_are_visible() {
        let mut a = arena(8, 2);
        a.slice_mut(WordOffset(2), WordCount(1)).copy_from_slice(&[7, 9]);
        assert_eq!(a.slice(WordOffset(2), WordCount(1)), &[7, 9]);
        assert_eq!(a.slice(WordOffset(0), WordCount(4)), &[0, 0, 0, 0, 7, 9, 0, 0]);
    }

    #[test]
    fn zero_capacity_arena_is_empty() {
        let a = arena(0, 4);
        assert_eq!(a.capacity_bytes(), 0);
        assert_eq!(a.offset_of(a.base()), None);
    }
}
