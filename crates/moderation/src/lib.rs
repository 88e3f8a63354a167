//! Content moderation for the media wall
//!
//! This crate handles the post filters applied to media wall results:
//! blocked accounts, hidden posts, profanity and duplicate suppression.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod duplicates;
pub mod filtering;
pub mod post;
pub mod profanity;

pub use config::FilterConfig;
pub use duplicates::DuplicatePolicy;
pub use filtering::{PostFilters, StandardFilters};
pub use post::{PostAccount, WallPost};
pub use profanity::{LexiconError, ProfanityLexicon};
