//! Closure-backed strategies.

use std::fmt;

use wordheap_core::{HoleList, PlacementStrategy, WordCount, WordOffset};

/// Adapts a plain function or closure into a [`PlacementStrategy`].
///
/// ```
/// use wordheap_core::{HoleList, PlacementStrategy, WordCount, WordOffset};
/// use wordheap_strategy::FnStrategy;
///
/// // Takes the last hole that fits.
/// let last_fit = FnStrategy::new("last-fit", |request: WordCount, holes: &HoleList| {
///     holes.iter().rev().find(|h| h.fits(request)).map(|h| h.offset)
/// });
/// let holes = HoleList::decode(&[2, 0, 8, 20, 8]).unwrap();
/// assert_eq!(last_fit.place(WordCount(4), &holes), Some(WordOffset(20)));
/// assert_eq!(last_fit.name(), "last-fit");
/// ```
pub struct FnStrategy<F> {
    name: String,
    place: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(WordCount, &HoleList) -> Option<WordOffset> + Send + 'static,
{
    /// Wrap `place` under the given name.
    pub fn new(name: impl Into<String>, place: F) -> Self {
        Self {
            name: name.into(),
            place,
        }
    }
}

impl<F> PlacementStrategy for FnStrategy<F>
where
    F: Fn(WordCount, &HoleList) -> Option<WordOffset> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn place(&self, request: WordCount, holes: &HoleList) -> Option<WordOffset> {
        (self.place)(request, holes)
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
