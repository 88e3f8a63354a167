//! Media wall post records
//!
//! A `WallPost` is one item returned by the search API. Only the id, the
//! author account and the text are read by the moderation filters; every
//! other attribute is carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account that authored a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAccount {
    /// Account identifier used for blocking
    pub id: String,

    /// Username / handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl PostAccount {
    /// Create an account reference with just an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            display_name: None,
        }
    }
}

/// A post shown on the media wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallPost {
    /// Post identifier
    pub id: String,

    /// Author of the post
    pub account: PostAccount,

    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Link to the original post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// When the post was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Attributes this crate does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WallPost {
    /// Create a post with an id and author account id
    pub fn new(id: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            account: PostAccount::new(account_id),
            text: None,
            url: None,
            created_at: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the author account
    pub fn with_account(mut self, account: PostAccount) -> Self {
        self.account = account;
        self
    }

    /// Check whether the post was authored by `account_id`
    pub fn is_by(&self, account_id: &str) -> bool {
        self.account.id == account_id
    }
}
