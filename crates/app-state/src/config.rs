//! Media wall configuration
//!
//! Besides the filter settings, the config carries four compatibility
//! switches for behaviours of the original media wall that are kept by
//! default. Turning a switch off selects the consistent behaviour.

use moderation::{FilterConfig, LexiconError, StandardFilters};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed config file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid profanity word list
    #[error("Invalid filter configuration: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Media wall configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaWallConfig {
    /// Profanity and duplicate filter settings
    #[serde(default)]
    pub filters: FilterConfig,

    /// Run the profanity filter on the raw incoming page, dropping the
    /// blocked-account exclusion computed for it
    #[serde(default = "default_true")]
    pub legacy_pagination_profanity: bool,

    /// Unblocking leaves the blocked list untouched, strips the account id
    /// from the hidden ids and restores nothing
    #[serde(default = "default_true")]
    pub legacy_unblock: bool,

    /// Showing a hidden post restores it even if its author is blocked or
    /// its text fails the active profanity filter
    #[serde(default = "default_true")]
    pub legacy_show_feed: bool,

    /// Re-derive the filtered list from all entities on every profanity or
    /// duplicate toggle instead of filtering the current list
    #[serde(default)]
    pub recompute_on_toggle: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MediaWallConfig {
    fn default() -> Self {
        Self {
            filters: FilterConfig::default(),
            legacy_pagination_profanity: true,
            legacy_unblock: true,
            legacy_show_feed: true,
            recompute_on_toggle: false,
        }
    }
}

impl MediaWallConfig {
    /// Create a config with the compatible defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with every compatibility switch turned off
    pub fn consistent() -> Self {
        Self {
            filters: FilterConfig::default(),
            legacy_pagination_profanity: false,
            legacy_unblock: false,
            legacy_show_feed: false,
            recompute_on_toggle: true,
        }
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), "Loaded media wall config");
        Ok(config)
    }

    /// Build the filters described by this config
    pub fn build_filters(&self) -> Result<StandardFilters> {
        Ok(self.filters.build_filters()?)
    }
}
