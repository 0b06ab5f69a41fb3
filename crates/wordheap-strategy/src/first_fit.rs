//! First-fit placement: the lowest-offset hole that can hold the request.

use wordheap_core::{HoleList, PlacementStrategy, WordCount, WordOffset};

/// Chooses the first sufficient hole in address order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstFit;

impl PlacementStrategy for FirstFit {
    fn name(&self) -> &str {
        "first-fit"
    }

    fn place(&self, request: WordCount, holes: &HoleList) -> Option<WordOffset> {
        holes.iter().find(|h| h.fits(request)).map(|h| h.offset)
    }
}
