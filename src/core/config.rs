//! Table configuration.
//!
//! The presentation layer configures the table at startup by providing:
//! - `SearchConfig`: Free-text search tuning
//! - `GameConfig`: RNG seed, animation timing and search settings
//!
//! Both can be built in code with `with_*` methods or read from JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("search.min_query_len must be at least 1")]
    ZeroQueryLength,
}

/// Settings for `search::search_cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this (in characters) match nothing.
    pub min_query_len: usize,

    /// Characters of context kept on each side of a match.
    pub context_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            context_chars: 12,
        }
    }
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shuffle seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// How long the presentation layer shows the draw animation.
    pub draw_animation_ms: u64,

    /// Search settings.
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_animation_ms: 400,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.min_query_len == 0 {
            return Err(ConfigError::ZeroQueryLength);
        }
        Ok(())
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the draw animation length.
    #[must_use]
    pub fn with_draw_animation(mut self, duration: Duration) -> Self {
        self.draw_animation_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Replace the search settings.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Draw animation length as a `Duration`.
    #[must_use]
    pub fn draw_animation(&self) -> Duration {
        Duration::from_millis(self.draw_animation_ms)
    }
}
