//! Name-keyed lookup of placement strategies.
//!
//! Used by configuration code that selects a strategy from a string
//! (e.g. `"worst-fit"`). Registration order is preserved so listings are
//! stable.

use indexmap::IndexMap;
use wordheap_core::PlacementStrategy;

use crate::{BestFit, FirstFit, WorstFit};

type Factory = Box<dyn Fn() -> Box<dyn PlacementStrategy> + Send>;

/// Insertion-ordered map from strategy name to a constructor.
///
/// Entries are factories rather than instances so one registry can hand
/// out any number of fresh strategies.
pub struct StrategyRegistry {
    entries: IndexMap<String, Factory>,
}

impl StrategyRegistry {
    /// An empty registry. Same as [`Default::default`]; use
    /// [`builtin`](Self::builtin) for the reference strategies.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// A registry holding `best-fit`, `worst-fit` and `first-fit`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(BestFit.name(), || Box::new(BestFit));
        registry.register(WorstFit.name(), || Box::new(WorstFit));
        registry.register(FirstFit.name(), || Box::new(FirstFit));
        registry
    }

    /// Register `factory` under `name`, replacing any previous entry
    /// with that name. Returns `true` if an entry was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> bool
    where
        F: Fn() -> Box<dyn PlacementStrategy> + Send + 'static,
    {
        self.entries
            .insert(name.into(), Box::new(factory))
            .is_some()
    }

    /// Build a fresh instance of the strategy registered as `name`.
    pub fn create(&self, name: &str) -> Option<Box<dyn PlacementStrategy>> {
        self.entries.get(name).map(|factory| factory())
    }

    /// Whether a strategy is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
