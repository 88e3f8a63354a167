//! Duplicate suppression
//!
//! The first occurrence of a post always wins, so applying the policy a
//! second time is a no-op.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::post::WallPost;

/// How two posts are judged to be duplicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicatePolicy {
    /// Same post id
    #[default]
    ById,
    /// Same normalised text; posts without text are keyed by id
    ByContent,
}

impl DuplicatePolicy {
    /// Key that identifies duplicates of `post` under this policy
    pub fn key(&self, post: &WallPost) -> String {
        match self {
            DuplicatePolicy::ById => format!("id:{}", post.id),
            DuplicatePolicy::ByContent => match post.text.as_deref().map(normalise_text) {
                Some(text) if !text.is_empty() => format!("text:{}", text),
                _ => format!("id:{}", post.id),
            },
        }
    }

    /// Keep the first post for every duplicate key
    pub fn dedupe(&self, posts: &[WallPost]) -> Vec<WallPost> {
        let mut seen = HashSet::with_capacity(posts.len());
        posts
            .iter()
            .filter(|post| seen.insert(self.key(post)))
            .cloned()
            .collect()
    }
}

/// Lowercase, collapse whitespace runs and trim
fn normalise_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(posts: &[WallPost]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_by_id_keeps_first() {
        let posts = vec![
            WallPost::new("1", "a").with_text("first"),
            WallPost::new("2", "b"),
            WallPost::new("1", "a").with_text("second"),
        ];

        let deduped = DuplicatePolicy::ById.dedupe(&posts);
        assert_eq!(ids(&deduped), vec!["1", "2"]);
        assert_eq!(deduped[0].text.as_deref(), Some("first"));
    }

    #[test]
    fn test_by_content() {
        let posts = vec![
            WallPost::new("1", "a").with_text("Buy  NOW"),
            WallPost::new("2", "b").with_text("buy now "),
            WallPost::new("3", "c"),
            WallPost::new("4", "c"),
            WallPost::new("3", "d"),
        ];

        let deduped = DuplicatePolicy::ByContent.dedupe(&posts);
        assert_eq!(ids(&deduped), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_dedupe_idempotent() {
        let posts = vec![
            WallPost::new("1", "a"),
            WallPost::new("1", "a"),
            WallPost::new("2", "a"),
        ];

        for policy in [DuplicatePolicy::ById, DuplicatePolicy::ByContent] {
            let once = policy.dedupe(&posts);
            assert_eq!(policy.dedupe(&once), once);
        }
    }

    #[test]
    fn test_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&DuplicatePolicy::ByContent).unwrap(),
            "\"byContent\""
        );
        let policy: DuplicatePolicy = serde_json::from_str("\"byId\"").unwrap();
        assert_eq!(policy, DuplicatePolicy::ById);
    }
}
