//! Best-fit placement: the smallest hole that can hold the request.
//!
//! Scans holes in ascending-offset order and replaces the running best
//! only on a strictly smaller size, so the earliest of several equal
//! candidates wins.
//!
//! ```
//! use wordheap_core::{HoleList, PlacementStrategy, WordCount, WordOffset};
//! use wordheap_strategy::BestFit;
//!
//! let holes = HoleList::decode(&[3, 0, 8, 10, 4, 20, 4]).unwrap();
//! assert_eq!(BestFit.place(WordCount(3), &holes), Some(WordOffset(10)));
//! ```

use wordheap_core::{Hole, HoleList, PlacementStrategy, WordCount, WordOffset};

/// Chooses the smallest sufficient hole.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestFit;

impl PlacementStrategy for BestFit {
    fn name(&self) -> &str {
        "best-fit"
    }

    fn place(&self, request: WordCount, holes: &HoleList) -> Option<WordOffset> {
        let mut best: Option<&Hole> = None;
        for hole in holes.iter().filter(|h| h.fits(request)) {
            if best.is_none_or(|b| hole.size < b.size) {
                best = Some(hole);
            }
        }
        best.map(|h| h.offset)
    }
}
