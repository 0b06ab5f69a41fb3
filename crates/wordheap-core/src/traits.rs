//! The placement-strategy seam.

use crate::hole::HoleList;
use crate::id::{WordCount, WordOffset};

/// Chooses which hole an allocation is carved from.
///
/// # Contract
///
/// - `place()` sees a read-only snapshot; `&self` and `&HoleList` make it
///   unable to mutate allocator state.
/// - A returned offset MUST be the start of a listed hole whose size is at
///   least `request`. The allocator validates the answer and fails with
///   `AllocError::InvalidStrategyResult` otherwise.
/// - Return `None` when the list is empty or nothing fits.
///
/// # Object safety
///
/// This trait is object-safe; the allocator stores its active strategy as
/// `Box<dyn PlacementStrategy>`.
///
/// # Examples
///
/// ```
/// use wordheap_core::{HoleList, PlacementStrategy, WordCount, WordOffset};
///
/// /// Always takes the last hole that fits.
/// struct LastFit;
///
/// impl PlacementStrategy for LastFit {
///     fn name(&self) -> &str { "last-fit" }
///
///     fn place(&self, request: WordCount, holes: &HoleList) -> Option<WordOffset> {
///         holes.iter().rev().find(|h| h.fits(request)).map(|h| h.offset)
///     }
/// }
///
/// let holes = HoleList::decode(&[2, 0, 4, 10, 6]).unwrap();
/// assert_eq!(LastFit.place(WordCount(3), &holes), Some(WordOffset(10)));
/// ```
pub trait PlacementStrategy: Send + 'static {
    /// Human-readable name for error reporting and logging.
    fn name(&self) -> &str;

    /// Pick the offset of a hole able to hold `request` words.
    fn place(&self, request: WordCount, holes: &HoleList) -> Option<WordOffset>;
}
