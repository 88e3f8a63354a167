//! Media wall state slice
//!
//! This module holds the moderation state of the media wall and the pure
//! transition function that folds actions into it. Each transition builds a
//! new [`MediaWallState`]; the previous snapshot is never modified.
//!
//! Failed API results, unknown actions and ids that match nothing all leave
//! the state as it was. Nothing in here returns an error.
//!
//! # Example
//!
//! ```
//! use app_state::media_wall::{ApiOutcome, MediaWallAction, MediaWallReducer, MediaWallState};
//! use moderation::WallPost;
//!
//! let reducer = MediaWallReducer::with_defaults();
//! let state = MediaWallState::initial();
//!
//! let posts = vec![WallPost::new("1", "alice"), WallPost::new("2", "bob")];
//! let state = reducer.reduce(&state, &MediaWallAction::SearchComplete(ApiOutcome::Success(posts)));
//! let state = reducer.reduce(&state, &MediaWallAction::BlockUser("alice".to_string()));
//!
//! assert_eq!(state.filtered_entities.len(), 1);
//! assert_eq!(state.blocked_user, vec!["alice".to_string()]);
//! ```

use moderation::filtering::{
    account_exclusion, account_inclusion, hidden_exclusion, hide_feed, remove_id, show_feed,
};
use moderation::{PostFilters, StandardFilters, WallPost};
use serde::{Deserialize, Serialize};

use crate::config::{MediaWallConfig, Result};

/// Moderation state of the media wall
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaWallState {
    /// Every post received, newest page first
    pub entities: Vec<WallPost>,

    /// Posts left after the moderation controls are applied
    pub filtered_entities: Vec<WallPost>,

    /// Post ids hidden by a moderator (may repeat)
    pub hidden_feed_id: Vec<String>,

    /// Blocked account ids
    pub blocked_user: Vec<String>,

    /// Whether the profanity filter is on
    pub profanity_check: bool,

    /// Whether duplicate removal is on
    pub remove_duplicate: bool,
}

impl MediaWallState {
    /// State at session start: no posts, no controls
    pub fn initial() -> Self {
        Self::default()
    }
}

/// Result of a search or pagination request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiOutcome {
    /// Request succeeded with a page of posts
    Success(Vec<WallPost>),
    /// Request failed
    Failure(String),
}

/// Actions understood by the media wall
///
/// On the wire an action is `{"type": ..., "payload": ...}`. Any `type` not
/// listed here decodes to [`MediaWallAction::Unrecognized`] whatever its
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "camelCase",
    try_from = "RawAction"
)]
pub enum MediaWallAction {
    /// A new search finished
    SearchComplete(ApiOutcome),
    /// The next page of the current search finished
    PaginationComplete(ApiOutcome),
    /// Hide one post
    HideFeed(String),
    /// Show a previously hidden post
    ShowFeed(String),
    /// Block an account
    BlockUser(String),
    /// Unblock an account
    UnblockUser(String),
    /// Turn the profanity filter on or off
    ProfanityToggle(bool),
    /// Turn duplicate removal on or off
    DuplicateToggle(bool),
    /// Any action type this slice does not handle
    Unrecognized,
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl TryFrom<RawAction> for MediaWallAction {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> std::result::Result<Self, Self::Error> {
        use serde_json::from_value;

        let action = match raw.kind.as_str() {
            "searchComplete" => MediaWallAction::SearchComplete(from_value(raw.payload)?),
            "paginationComplete" => MediaWallAction::PaginationComplete(from_value(raw.payload)?),
            "hideFeed" => MediaWallAction::HideFeed(from_value(raw.payload)?),
            "showFeed" => MediaWallAction::ShowFeed(from_value(raw.payload)?),
            "blockUser" => MediaWallAction::BlockUser(from_value(raw.payload)?),
            "unblockUser" => MediaWallAction::UnblockUser(from_value(raw.payload)?),
            "profanityToggle" => MediaWallAction::ProfanityToggle(from_value(raw.payload)?),
            "duplicateToggle" => MediaWallAction::DuplicateToggle(from_value(raw.payload)?),
            _ => MediaWallAction::Unrecognized,
        };
        Ok(action)
    }
}

impl MediaWallAction {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            MediaWallAction::SearchComplete(_) => "searchComplete",
            MediaWallAction::PaginationComplete(_) => "paginationComplete",
            MediaWallAction::HideFeed(_) => "hideFeed",
            MediaWallAction::ShowFeed(_) => "showFeed",
            MediaWallAction::BlockUser(_) => "blockUser",
            MediaWallAction::UnblockUser(_) => "unblockUser",
            MediaWallAction::ProfanityToggle(_) => "profanityToggle",
            MediaWallAction::DuplicateToggle(_) => "duplicateToggle",
            MediaWallAction::Unrecognized => "unrecognized",
        }
    }
}

/// Transition function for [`MediaWallState`]
pub struct MediaWallReducer<F = StandardFilters> {
    filters: F,
    config: MediaWallConfig,
}

impl MediaWallReducer<StandardFilters> {
    /// Create a reducer with the default filters and config
    pub fn with_defaults() -> Self {
        Self::new(StandardFilters::default(), MediaWallConfig::default())
    }

    /// Create a reducer whose filters are built from `config`
    pub fn from_config(config: MediaWallConfig) -> Result<Self> {
        let filters = config.build_filters()?;
        Ok(Self::new(filters, config))
    }
}

impl Default for MediaWallReducer<StandardFilters> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<F: PostFilters> MediaWallReducer<F> {
    /// Create a reducer with explicit filters
    pub fn new(filters: F, config: MediaWallConfig) -> Self {
        Self { filters, config }
    }

    /// Get the config
    pub fn config(&self) -> &MediaWallConfig {
        &self.config
    }

    /// Get the filters
    pub fn filters(&self) -> &F {
        &self.filters
    }

    /// Compute the state that follows `state` after `action`
    pub fn reduce(&self, state: &MediaWallState, action: &MediaWallAction) -> MediaWallState {
        tracing::trace!(action = action.kind(), "Reducing media wall action");

        match action {
            MediaWallAction::SearchComplete(ApiOutcome::Success(posts)) => {
                self.search_complete(state, posts)
            }
            MediaWallAction::PaginationComplete(ApiOutcome::Success(posts)) => {
                self.pagination_complete(state, posts)
            }
            MediaWallAction::SearchComplete(ApiOutcome::Failure(error))
            | MediaWallAction::PaginationComplete(ApiOutcome::Failure(error)) => {
                tracing::debug!(action = action.kind(), %error, "Ignoring failed request");
                state.clone()
            }
            MediaWallAction::HideFeed(id) => {
                let mut hidden_feed_id = state.hidden_feed_id.clone();
                hidden_feed_id.push(id.clone());
                MediaWallState {
                    filtered_entities: hide_feed(&state.filtered_entities, id),
                    hidden_feed_id,
                    ..state.clone()
                }
            }
            MediaWallAction::ShowFeed(id) => self.show_post(state, id),
            MediaWallAction::BlockUser(account_id) => {
                let mut blocked_user = state.blocked_user.clone();
                blocked_user.push(account_id.clone());
                MediaWallState {
                    filtered_entities: account_exclusion(&state.filtered_entities, &blocked_user),
                    blocked_user,
                    ..state.clone()
                }
            }
            MediaWallAction::UnblockUser(account_id) => self.unblock_user(state, account_id),
            MediaWallAction::ProfanityToggle(enabled) => {
                let next = MediaWallState {
                    profanity_check: *enabled,
                    ..state.clone()
                };
                if self.config.recompute_on_toggle {
                    self.rederive(next)
                } else if *enabled {
                    MediaWallState {
                        filtered_entities: self.filters.profanity_filter(&next.filtered_entities),
                        ..next
                    }
                } else {
                    next
                }
            }
            MediaWallAction::DuplicateToggle(enabled) => {
                let next = MediaWallState {
                    remove_duplicate: *enabled,
                    ..state.clone()
                };
                if self.config.recompute_on_toggle {
                    self.rederive(next)
                } else if *enabled {
                    MediaWallState {
                        filtered_entities: self.filters.remove_duplicates(&next.filtered_entities),
                        ..next
                    }
                } else {
                    next
                }
            }
            MediaWallAction::Unrecognized => state.clone(),
        }
    }

    fn search_complete(&self, state: &MediaWallState, posts: &[WallPost]) -> MediaWallState {
        let mut filtered = account_exclusion(posts, &state.blocked_user);
        if state.profanity_check {
            filtered = self.filters.profanity_filter(&filtered);
        }
        if state.remove_duplicate {
            filtered = self.filters.remove_duplicates(&filtered);
        }

        tracing::debug!(
            received = posts.len(),
            visible = filtered.len(),
            "Search results loaded"
        );

        MediaWallState {
            entities: posts.to_vec(),
            filtered_entities: filtered,
            ..state.clone()
        }
    }

    fn pagination_complete(&self, state: &MediaWallState, posts: &[WallPost]) -> MediaWallState {
        let unblocked = account_exclusion(posts, &state.blocked_user);
        let mut filtered = if !state.profanity_check {
            unblocked
        } else if self.config.legacy_pagination_profanity {
            self.filters.profanity_filter(posts)
        } else {
            self.filters.profanity_filter(&unblocked)
        };
        filtered.extend(state.filtered_entities.iter().cloned());
        if state.remove_duplicate {
            filtered = self.filters.remove_duplicates(&filtered);
        }

        let mut entities = posts.to_vec();
        entities.extend(state.entities.iter().cloned());

        tracing::debug!(
            received = posts.len(),
            total = entities.len(),
            visible = filtered.len(),
            "Next page loaded"
        );

        MediaWallState {
            entities,
            filtered_entities: filtered,
            ..state.clone()
        }
    }

    fn show_post(&self, state: &MediaWallState, id: &str) -> MediaWallState {
        let mut filtered = show_feed(&state.entities, &state.filtered_entities, id);

        if !self.config.legacy_show_feed {
            filtered = account_exclusion(&filtered, &state.blocked_user);
            if state.profanity_check {
                filtered = self.filters.profanity_filter(&filtered);
            }
            if state.remove_duplicate {
                filtered = self.filters.remove_duplicates(&filtered);
            }
        }

        MediaWallState {
            filtered_entities: filtered,
            hidden_feed_id: remove_id(&state.hidden_feed_id, id),
            ..state.clone()
        }
    }

    fn unblock_user(&self, state: &MediaWallState, account_id: &str) -> MediaWallState {
        let restored = account_inclusion(&state.entities, &state.filtered_entities, account_id);

        if self.config.legacy_unblock {
            // The account stays in the blocked list, so the re-exclusion drops
            // everything the inclusion brought back.
            return MediaWallState {
                filtered_entities: account_exclusion(&restored, &state.blocked_user),
                hidden_feed_id: remove_id(&state.hidden_feed_id, account_id),
                ..state.clone()
            };
        }

        let blocked_user = remove_id(&state.blocked_user, account_id);
        let mut filtered = hidden_exclusion(&restored, &state.hidden_feed_id);
        if state.profanity_check {
            filtered = self.filters.profanity_filter(&filtered);
        }
        if state.remove_duplicate {
            filtered = self.filters.remove_duplicates(&filtered);
        }

        MediaWallState {
            filtered_entities: filtered,
            blocked_user,
            ..state.clone()
        }
    }

    /// Rebuild the filtered list from every entity and every active control
    fn rederive(&self, state: MediaWallState) -> MediaWallState {
        let mut filtered = account_exclusion(&state.entities, &state.blocked_user);
        filtered = hidden_exclusion(&filtered, &state.hidden_feed_id);
        if state.profanity_check {
            filtered = self.filters.profanity_filter(&filtered);
        }
        if state.remove_duplicate {
            filtered = self.filters.remove_duplicates(&filtered);
        }
        MediaWallState {
            filtered_entities: filtered,
            ..state
        }
    }
}

/// All posts received
pub fn select_entities(state: &MediaWallState) -> &[WallPost] {
    &state.entities
}

/// Posts left after moderation
pub fn select_filtered_entities(state: &MediaWallState) -> &[WallPost] {
    &state.filtered_entities
}

/// Hidden post ids
pub fn select_hidden_feed_id(state: &MediaWallState) -> &[String] {
    &state.hidden_feed_id
}

/// Blocked account ids
pub fn select_blocked_user(state: &MediaWallState) -> &[String] {
    &state.blocked_user
}

/// Profanity filter flag
pub fn select_profanity_check(state: &MediaWallState) -> bool {
    state.profanity_check
}

/// Duplicate removal flag
pub fn select_remove_duplicate(state: &MediaWallState) -> bool {
    state.remove_duplicate
}
