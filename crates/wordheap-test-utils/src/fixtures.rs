//! Placement strategies that break the contract on purpose.

use wordheap_core::{HoleList, PlacementStrategy, WordCount, WordOffset};

/// Always answers with a fixed offset, whatever the hole list says.
#[derive(Clone, Copy, Debug)]
pub struct FixedOffset(pub WordOffset);

impl PlacementStrategy for FixedOffset {
    fn name(&self) -> &str {
        "fixed-offset"
    }

    fn place(&self, _request: WordCount, _holes: &HoleList) -> Option<WordOffset> {
        Some(self.0)
    }
}

/// Picks the smallest hole, ignoring whether it is large enough.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoresSize;

impl PlacementStrategy for IgnoresSize {
    fn name(&self) -> &str {
        "ignores-size"
    }

    fn place(&self, _request: WordCount, holes: &HoleList) -> Option<WordOffset> {
        holes.iter().min_by_key(|h| h.size).map(|h| h.offset)
    }
}

/// Never finds a fit.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverFits;

impl PlacementStrategy for NeverFits {
    fn name(&self) -> &str {
        "never-fits"
    }

    fn place(&self, _request: WordCount, _holes: &HoleList) -> Option<WordOffset> {
        None
    }
}
