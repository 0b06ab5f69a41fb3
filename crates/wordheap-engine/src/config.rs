//! Allocator configuration, validation, and error types.
//!
//! [`AllocatorConfig`] is the builder-input for a
//! [`MemoryManager`](crate::MemoryManager). [`validate()`](AllocatorConfig::validate)
//! checks the word size once at construction; nothing is re-checked on
//! the allocate/free path.

use std::error::Error;
use std::fmt;

use wordheap_core::{PlacementStrategy, MAX_ARENA_WORDS};
use wordheap_strategy::{BestFit, StrategyRegistry};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`AllocatorConfig::validate()`] or strategy lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Word size is zero.
    ZeroWordSize,
    /// A full-size arena would overflow `usize` bytes.
    WordSizeTooLarge {
        /// The configured word size.
        word_size: usize,
    },
    /// No strategy is registered under the requested name.
    UnknownStrategy {
        /// The requested name.
        name: String,
        /// Names that are registered.
        available: Vec<String>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordSize => write!(f, "word_size must be at least 1"),
            Self::WordSizeTooLarge { word_size } => {
                write!(
                    f,
                    "word_size {word_size} overflows a {MAX_ARENA_WORDS}-word arena"
                )
            }
            Self::UnknownStrategy { name, available } => {
                write!(
                    f,
                    "unknown strategy '{name}' (available: {})",
                    available.join(", ")
                )
            }
        }
    }
}

impl Error for ConfigError {}

// ── AllocatorConfig ────────────────────────────────────────────────

/// Construction parameters for a [`MemoryManager`](crate::MemoryManager).
pub struct AllocatorConfig {
    /// Allocation granularity in bytes. Default: 1.
    pub word_size: usize,
    /// If set, the manager initializes an arena of this many words on
    /// construction. Default: `None` (call `initialize` explicitly).
    pub initial_capacity_words: Option<usize>,
    /// Active placement strategy. Default: [`BestFit`].
    pub strategy: Box<dyn PlacementStrategy>,
}

impl AllocatorConfig {
    /// Config with the given word size, best-fit placement and no arena.
    pub fn new(word_size: usize) -> Self {
        Self {
            word_size,
            initial_capacity_words: None,
            strategy: Box::new(BestFit),
        }
    }

    /// Initialize an arena of `capacity_words` on construction.
    pub fn with_capacity(mut self, capacity_words: usize) -> Self {
        self.initial_capacity_words = Some(capacity_words);
        self
    }

    /// Use `strategy` for placement.
    pub fn with_strategy(mut self, strategy: impl PlacementStrategy) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Use the built-in strategy registered as `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStrategy`] if `name` is not one of
    /// the names in [`StrategyRegistry::builtin()`].
    pub fn with_strategy_name(self, name: &str) -> Result<Self, ConfigError> {
        self.with_strategy_from(&StrategyRegistry::builtin(), name)
    }

    /// Use the strategy registered as `name` in `registry`.
    pub fn with_strategy_from(
        mut self,
        registry: &StrategyRegistry,
        name: &str,
    ) -> Result<Self, ConfigError> {
        self.strategy = registry
            .create(name)
            .ok_or_else(|| ConfigError::UnknownStrategy {
                name: name.to_string(),
                available: registry.names().map(str::to_string).collect(),
            })?;
        Ok(self)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_size == 0 {
            return Err(ConfigError::ZeroWordSize);
        }
        if self.word_size.checked_mul(MAX_ARENA_WORDS).is_none() {
            return Err(ConfigError::WordSizeTooLarge {
                word_size: self.word_size,
            });
        }
        Ok(())
    }
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Debug for AllocatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllocatorConfig")
            .field("word_size", &self.word_size)
            .field("initial_capacity_words", &self.initial_capacity_words)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_best_fit_word_size_one() {
        let config = AllocatorConfig::default();
        assert_eq!(config.word_size, 1);
        assert_eq!(config.strategy.name(), "best-fit");
        assert!(config.initial_capacity_words.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_word_size_rejected() {
        assert_eq!(
            AllocatorConfig::new(0).validate(),
            Err(ConfigError::ZeroWordSize)
        );
    }

    #[test]
    fn huge_word_size_rejected() {
        let err = AllocatorConfig::new(usize::MAX).validate().unwrap_err();
        assert!(matches!(err, ConfigError::WordSizeTooLarge { .. }));
    }

    #[test]
    fn strategy_by_name() {
        let config = AllocatorConfig::new(4)
            .with_strategy_name("worst-fit")
            .unwrap();
        assert_eq!(config.strategy.name(), "worst-fit");
    }

    #[test]
    fn unknown_strategy_lists_alternatives() {
        let err = AllocatorConfig::new(4)
            .with_strategy_name("buddy")
            .unwrap_err();
        match &err {
            ConfigError::UnknownStrategy { name, available } => {
                assert_eq!(name, "buddy");
                assert!(available.iter().any(|n| n == "best-fit"));
            }
            other => panic!("expected UnknownStrategy, got {other:?}"),
        }
        assert!(err.to_string().contains("first-fit"));
    }

    #[test]
    fn debug_shows_strategy_name() {
        let config = AllocatorConfig::new(2).with_capacity(10);
        let text = format!("{config:?}");
        assert!(text.contains("best-fit"));
        assert!(text.contains("Some(10)"));
    }
}
