//! Profanity lexicon
//!
//! Matching is done on whole Unicode words, case-insensitively. A lexicon
//! entry with several words matches when the same word sequence appears in
//! the text.

use std::collections::HashSet;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::post::WallPost;

/// Errors raised while editing a lexicon
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    /// Word is empty after normalisation
    #[error("Lexicon entries must contain at least one word")]
    EmptyWord,

    /// Word list too large
    #[error("Lexicon too large: {count} exceeds maximum {max}")]
    TooManyWords {
        /// Actual count
        count: usize,
        /// Maximum allowed
        max: usize,
    },
}

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Maximum number of lexicon entries
pub const MAX_LEXICON_WORDS: usize = 1000;

/// Built-in word list used when no configuration overrides it
pub const DEFAULT_PROFANITY_WORDS: &[&str] = &[
    "arse",
    "arsehole",
    "asshole",
    "bastard",
    "bitch",
    "bollocks",
    "bullshit",
    "crap",
    "damn",
    "dickhead",
    "fuck",
    "fucking",
    "motherfucker",
    "piss",
    "prick",
    "shit",
    "slut",
    "twat",
    "wanker",
];

/// Case-insensitive set of profane words and phrases
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfanityLexicon {
    /// Single-word entries
    words: HashSet<String>,
    /// Multi-word entries, stored as normalised word sequences
    phrases: HashSet<Vec<String>>,
}

fn normalise(entry: &str) -> Vec<String> {
    entry.unicode_words().map(str::to_lowercase).collect()
}

impl ProfanityLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lexicon holding the built-in word list
    pub fn with_defaults() -> Self {
        // Every built-in entry is a single lowercase word.
        Self {
            words: DEFAULT_PROFANITY_WORDS.iter().map(|w| w.to_string()).collect(),
            phrases: HashSet::new(),
        }
    }

    /// Create a lexicon from a list of entries
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in words {
            lexicon.add_word(word.as_ref())?;
        }
        Ok(lexicon)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len() + self.phrases.len()
    }

    /// Check if the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a word or phrase
    pub fn add_word(&mut self, word: &str) -> Result<()> {
        let mut parts = normalise(word);
        if parts.is_empty() {
            return Err(LexiconError::EmptyWord);
        }
        let present = if parts.len() == 1 {
            self.words.contains(&parts[0])
        } else {
            self.phrases.contains(&parts)
        };
        if present {
            return Ok(());
        }
        if self.len() >= MAX_LEXICON_WORDS {
            return Err(LexiconError::TooManyWords {
                count: self.len() + 1,
                max: MAX_LEXICON_WORDS,
            });
        }

        if parts.len() == 1 {
            self.words.insert(parts.remove(0));
        } else {
            self.phrases.insert(parts);
        }
        Ok(())
    }

    /// Remove a word or phrase
    pub fn remove_word(&mut self, word: &str) {
        let mut parts = normalise(word);
        match parts.len() {
            0 => {}
            1 => {
                self.words.remove(&parts.remove(0));
            }
            _ => {
                self.phrases.remove(&parts);
            }
        }
    }

    /// Check whether `text` contains any lexicon entry
    pub fn is_profane(&self, text: &str) -> bool {
        let words = normalise(text);

        if words.iter().any(|w| self.words.contains(w)) {
            return true;
        }

        self.phrases.iter().any(|phrase| {
            words
                .windows(phrase.len())
                .any(|window| window == phrase.as_slice())
        })
    }

    /// Check whether a post's text is profane. Posts without text never are.
    pub fn is_post_profane(&self, post: &WallPost) -> bool {
        post.text.as_deref().is_some_and(|text| self.is_profane(text))
    }
}
