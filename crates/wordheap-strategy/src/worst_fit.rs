//! Worst-fit placement: the largest hole that can hold the request.
//!
//! Leaves the biggest possible remainder behind. Ties go to the earliest
//! offset because the running worst is only replaced on a strictly
//! larger size.

use wordheap_core::{Hole, HoleList, PlacementStrategy, WordCount, WordOffset};

/// Chooses the largest sufficient hole.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorstFit;

impl PlacementStrategy for WorstFit {
    fn name(&self) -> &str {
        "worst-fit"
    }

    fn place(&self, request: WordCount, holes: &HoleList) -> Option<WordOffset> {
        let mut worst: Option<&Hole> = None;
        for hole in holes.iter().filter(|h| h.fits(request)) {
            if worst.is_none_or(|w| hole.size > w.size) {
                worst = Some(hole);
            }
        }
        worst.map(|h| h.offset)
    }
}
