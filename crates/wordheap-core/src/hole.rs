//! Holes and the hole-list snapshot consumed by placement strategies.
//!
//! A [`HoleList`] is a read-only, ascending-offset sequence of every free
//! run in the arena. Its wire form is a flat `u16` buffer:
//!
//! ```text
//! [count, offset_1, size_1, offset_2, size_2, ...]
//! ```
//!
//! Strategies receive the typed list; [`HoleList::encode`] and
//! [`HoleList::decode`] exist for tooling that exchanges the flat form.

use smallvec::SmallVec;

use crate::error::HoleListError;
use crate::id::{WordCount, WordOffset};

/// A maximal contiguous free run of words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hole {
    /// First word of the run.
    pub offset: WordOffset,
    /// Length of the run in words. Never zero.
    pub size: WordCount,
}

impl Hole {
    /// Create a hole descriptor.
    pub fn new(offset: impl Into<WordOffset>, size: impl Into<WordCount>) -> Self {
        Self {
            offset: offset.into(),
            size: size.into(),
        }
    }

    /// One past the last word of the run, as a `usize`.
    pub fn end(&self) -> usize {
        self.offset.get() + self.size.get()
    }

    /// Whether a request of `request` words fits in this hole.
    pub fn fits(&self, request: WordCount) -> bool {
        self.size >= request
    }
}

/// Ordered snapshot of every hole in the arena.
///
/// Invariants (enforced by [`push`](Self::push) and [`decode`](Self::decode)):
/// offsets strictly increase, holes never overlap, and no hole is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleList {
    holes: SmallVec<[Hole; 8]>,
}

impl HoleList {
    /// Create an empty hole list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hole that lies strictly after every hole already present.
    ///
    /// Returns an error if the hole is empty or not past the previous end.
    pub fn push(&mut self, hole: Hole) -> Result<(), HoleListError> {
        check_next(self.holes.last(), &hole, self.holes.len())?;
        self.holes.push(hole);
        Ok(())
    }

    /// Build a list from holes the caller already knows are non-empty,
    /// in range, and in strictly ascending non-overlapping order, such as
    /// the holes of a well-formed block table.
    ///
    /// Debug builds verify those invariants and panic on a violation;
    /// release builds trust the caller.
    pub fn from_sorted_unchecked(holes: impl IntoIterator<Item = Hole>) -> Self {
        let list = Self {
            holes: holes.into_iter().collect(),
        };
        debug_assert_eq!(list.validate(), Ok(()), "holes out of order");
        list
    }

    /// Check every invariant [`push`](Self::push) enforces.
    pub fn validate(&self) -> Result<(), HoleListError> {
        let mut prev = None;
        for (index, hole) in self.holes.iter().enumerate() {
            check_next(prev, hole, index)?;
            prev = Some(hole);
        }
        Ok(())
    }

    /// Number of holes.
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Whether the arena has no free space at all.
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Iterate holes in ascending-offset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Hole> {
        self.holes.iter()
    }

    /// The holes as a slice.
    pub fn as_slice(&self) -> &[Hole] {
        &self.holes
    }

    /// Size of the largest hole, or zero when there are none.
    pub fn largest(&self) -> WordCount {
        self.holes
            .iter()
            .map(|h| h.size)
            .max()
            .unwrap_or_default()
    }

    /// Total free words across all holes.
    pub fn total_words(&self) -> usize {
        self.holes.iter().map(|h| h.size.get()).sum()
    }

    /// Whether `offset` is the start of a listed hole.
    pub fn contains_offset(&self, offset: WordOffset) -> bool {
        self.holes
            .binary_search_by_key(&offset, |h| h.offset)
            .is_ok()
    }

    /// Serialize to the flat `u16` form `[count, off, size, ...]`.
    ///
    /// The hole count fits in `u16` because holes are non-empty and
    /// non-adjacent inside a 65535-word arena.
    pub fn encode(&self) -> Vec<u16> {
        let mut buf = Vec::with_capacity(1 + 2 * self.holes.len());
        buf.push(self.holes.len() as u16);
        for hole in &self.holes {
            buf.push(hole.offset.0);
            buf.push(hole.size.0);
        }
        buf
    }

    /// Parse the flat `u16` form produced by [`encode`](Self::encode).
    ///
    /// Values past the last pair are ignored.
    pub fn decode(buf: &[u16]) -> Result<Self, HoleListError> {
        let Some((&count, pairs)) = buf.split_first() else {
            return Err(HoleListError::Truncated {
                expected: 1,
                found: 0,
            });
        };
        let count = count as usize;
        if pairs.len() < 2 * count {
            return Err(HoleListError::Truncated {
                expected: 1 + 2 * count,
                found: buf.len(),
            });
        }
        let mut list = Self::new();
        for pair in pairs.chunks_exact(2).take(count) {
            list.push(Hole::new(pair[0], pair[1]))?;
        }
        Ok(list)
    }
}

fn check_next(prev: Option<&Hole>, hole: &Hole, index: usize) -> Result<(), HoleListError> {
    if hole.size.is_zero() {
        return Err(HoleListError::ZeroSizeHole { index });
    }
    if hole.end() > crate::id::MAX_ARENA_WORDS {
        return Err(HoleListError::OutOfRange { index });
    }
    match prev {
        Some(prev) if hole.offset.get() < prev.end() => Err(HoleListError::Unordered { index }),
        _ => Ok(()),
    }
}

impl<'a> IntoIterator for &'a HoleList {
    type Item = &'a Hole;
    type IntoIter = std::slice::Iter<'a, Hole>;

    fn into_iter(self) -> Self::IntoIter {
        self.holes.iter()
    }
}
