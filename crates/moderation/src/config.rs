//! Filter configuration

use serde::{Deserialize, Serialize};

use crate::duplicates::DuplicatePolicy;
use crate::filtering::StandardFilters;
use crate::profanity::{ProfanityLexicon, Result, DEFAULT_PROFANITY_WORDS};

/// Settings for the profanity and duplicate filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Base profanity word list
    #[serde(default = "default_profanity_words")]
    pub profanity_words: Vec<String>,

    /// Words added on top of the base list
    #[serde(default)]
    pub extra_profanity_words: Vec<String>,

    /// How duplicates are detected
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

fn default_profanity_words() -> Vec<String> {
    DEFAULT_PROFANITY_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            profanity_words: default_profanity_words(),
            extra_profanity_words: Vec::new(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl FilterConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the lexicon described by this config
    pub fn lexicon(&self) -> Result<ProfanityLexicon> {
        ProfanityLexicon::from_words(
            self.profanity_words
                .iter()
                .chain(self.extra_profanity_words.iter()),
        )
    }

    /// Build the standard filters described by this config
    pub fn build_filters(&self) -> Result<StandardFilters> {
        let lexicon = self.lexicon()?;
        tracing::debug!(
            words = lexicon.len(),
            policy = ?self.duplicate_policy,
            "Built media wall filters"
        );
        Ok(StandardFilters::new(lexicon, self.duplicate_policy))
    }
}
