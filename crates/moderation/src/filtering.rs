//! Media wall filter predicates
//!
//! This module provides the list operations the media wall applies on every
//! state transition: account exclusion and re-inclusion, per-post hide/show,
//! and the policy-driven profanity and duplicate filters.
//!
//! Every function is pure and order-preserving. Restoring operations put a
//! post back at its position relative to the full, unfiltered list and never
//! insert an id that is already present.

use std::collections::{HashMap, HashSet};

use crate::duplicates::DuplicatePolicy;
use crate::post::WallPost;
use crate::profanity::ProfanityLexicon;

/// Policy-driven filters applied on top of the structural ones
///
/// Implementations must be idempotent and order-preserving: filtering an
/// already filtered list returns it unchanged.
pub trait PostFilters: Send + Sync {
    /// Drop posts judged profane
    fn profanity_filter(&self, posts: &[WallPost]) -> Vec<WallPost>;

    /// Collapse duplicate posts, keeping the first occurrence
    fn remove_duplicates(&self, posts: &[WallPost]) -> Vec<WallPost>;
}

/// Filters backed by a [`ProfanityLexicon`] and a [`DuplicatePolicy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardFilters {
    lexicon: ProfanityLexicon,
    duplicate_policy: DuplicatePolicy,
}

impl StandardFilters {
    /// Create filters from a lexicon and a duplicate policy
    pub fn new(lexicon: ProfanityLexicon, duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            lexicon,
            duplicate_policy,
        }
    }

    /// Get the profanity lexicon
    pub fn lexicon(&self) -> &ProfanityLexicon {
        &self.lexicon
    }

    /// Get the duplicate policy
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }
}

impl Default for StandardFilters {
    fn default() -> Self {
        Self::new(ProfanityLexicon::with_defaults(), DuplicatePolicy::default())
    }
}

impl PostFilters for StandardFilters {
    fn profanity_filter(&self, posts: &[WallPost]) -> Vec<WallPost> {
        posts
            .iter()
            .filter(|post| !self.lexicon.is_post_profane(post))
            .cloned()
            .collect()
    }

    fn remove_duplicates(&self, posts: &[WallPost]) -> Vec<WallPost> {
        self.duplicate_policy.dedupe(posts)
    }
}

/// Remove every post authored by one of `blocked`
pub fn account_exclusion(posts: &[WallPost], blocked: &[String]) -> Vec<WallPost> {
    if blocked.is_empty() {
        return posts.to_vec();
    }
    let blocked: HashSet<&str> = blocked.iter().map(String::as_str).collect();
    posts
        .iter()
        .filter(|post| !blocked.contains(post.account.id.as_str()))
        .cloned()
        .collect()
}

/// Restore `account_id`'s posts from `all` into `current`
pub fn account_inclusion(all: &[WallPost], current: &[WallPost], account_id: &str) -> Vec<WallPost> {
    restore_where(all, current, |post| post.is_by(account_id))
}

/// Remove the post with `id`
pub fn hide_feed(posts: &[WallPost], id: &str) -> Vec<WallPost> {
    posts.iter().filter(|post| post.id != id).cloned().collect()
}

/// Restore the post with `id` from `all` into `current`
pub fn show_feed(all: &[WallPost], current: &[WallPost], id: &str) -> Vec<WallPost> {
    restore_where(all, current, |post| post.id == id)
}

/// Remove every post whose id is in `hidden`
pub fn hidden_exclusion(posts: &[WallPost], hidden: &[String]) -> Vec<WallPost> {
    if hidden.is_empty() {
        return posts.to_vec();
    }
    let hidden: HashSet<&str> = hidden.iter().map(String::as_str).collect();
    posts
        .iter()
        .filter(|post| !hidden.contains(post.id.as_str()))
        .cloned()
        .collect()
}

/// Remove every occurrence of `id`
pub fn remove_id(ids: &[String], id: &str) -> Vec<String> {
    ids.iter().filter(|existing| existing.as_str() != id).cloned().collect()
}

/// Merge the posts of `all` matching `restore` back into `current`.
///
/// A restored post is placed before the first post of `current` that comes
/// after it in `all`. Posts whose id is already in `current` are skipped, as
/// are repeated ids within `all`.
fn restore_where<P>(all: &[WallPost], current: &[WallPost], restore: P) -> Vec<WallPost>
where
    P: Fn(&WallPost) -> bool,
{
    let mut present: HashSet<&str> = current.iter().map(|p| p.id.as_str()).collect();

    let mut position: HashMap<&str, usize> = HashMap::with_capacity(all.len());
    for (index, post) in all.iter().enumerate() {
        position.entry(post.id.as_str()).or_insert(index);
    }

    let mut restored: Vec<(usize, &WallPost)> = Vec::new();
    for (index, post) in all.iter().enumerate() {
        if restore(post) && present.insert(post.id.as_str()) {
            restored.push((index, post));
        }
    }

    if restored.is_empty() {
        return current.to_vec();
    }

    let mut merged = Vec::with_capacity(current.len() + restored.len());
    let mut pending = restored.into_iter().peekable();
    for post in current {
        // Posts missing from `all` keep their place and never pull restored ones ahead.
        if let Some(&at) = position.get(post.id.as_str()) {
            while let Some((_, restored_post)) = pending.next_if(|(index, _)| *index < at) {
                merged.push(restored_post.clone());
            }
        }
        merged.push(post.clone());
    }
    merged.extend(pending.map(|(_, post)| post.clone()));
    merged
}
