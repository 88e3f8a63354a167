//! Media wall store
//!
//! The store owns the current [`MediaWallState`] snapshot and feeds actions
//! through [`MediaWallReducer`] one at a time. New snapshots are published on
//! a watch channel; every dispatch also emits a [`StoreEvent`].
//!
//! # Example
//!
//! ```no_run
//! use app_state::config::MediaWallConfig;
//! use app_state::media_wall::MediaWallAction;
//! use app_state::store::MediaWallStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MediaWallStore::new(MediaWallConfig::default()).unwrap();
//!     let mut rx = store.subscribe();
//!
//!     store.dispatch(MediaWallAction::ProfanityToggle(true));
//!
//!     rx.changed().await.unwrap();
//!     assert!(rx.borrow().profanity_check);
//! }
//! ```

use moderation::{PostFilters, StandardFilters};
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, watch};

use crate::config::{self, MediaWallConfig};
use crate::media_wall::{MediaWallAction, MediaWallReducer, MediaWallState};

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Action could not be decoded
    #[error("Invalid action: {0}")]
    InvalidAction(#[from] serde_json::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Events broadcast after each dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The action produced a new snapshot
    Changed {
        /// Action kind
        action: &'static str,
    },
    /// The action left the state as it was
    Unchanged {
        /// Action kind
        action: &'static str,
    },
    /// The store went back to the initial state
    Reset,
}

/// Holder of the media wall state for one session
pub struct MediaWallStore<F = StandardFilters> {
    reducer: MediaWallReducer<F>,
    /// Current snapshot; the lock also serialises dispatches
    state: Mutex<Arc<MediaWallState>>,
    state_tx: watch::Sender<Arc<MediaWallState>>,
    events_tx: broadcast::Sender<StoreEvent>,
}

impl MediaWallStore<StandardFilters> {
    /// Create a store whose filters are built from `config`
    pub fn new(config: MediaWallConfig) -> config::Result<Self> {
        Ok(Self::with_reducer(MediaWallReducer::from_config(config)?))
    }
}

impl<F: PostFilters> MediaWallStore<F> {
    /// Create a store around an existing reducer
    pub fn with_reducer(reducer: MediaWallReducer<F>) -> Self {
        let initial = Arc::new(MediaWallState::initial());
        let (state_tx, _) = watch::channel(initial.clone());
        let (events_tx, _) = broadcast::channel(64);

        Self {
            reducer,
            state: Mutex::new(initial),
            state_tx,
            events_tx,
        }
    }

    /// Create a store with explicit filters
    pub fn with_filters(filters: F, config: MediaWallConfig) -> Self {
        Self::with_reducer(MediaWallReducer::new(filters, config))
    }

    /// Get the reducer
    pub fn reducer(&self) -> &MediaWallReducer<F> {
        &self.reducer
    }

    /// Apply one action and return the resulting snapshot
    pub fn dispatch(&self, action: MediaWallAction) -> Arc<MediaWallState> {
        let kind = action.kind();
        let mut current = self.state.lock();
        let next = self.reducer.reduce(&current, &action);

        if next == **current {
            tracing::debug!(action = kind, "Media wall state unchanged");
            let _ = self.events_tx.send(StoreEvent::Unchanged { action: kind });
            return current.clone();
        }

        let next = Arc::new(next);
        *current = next.clone();
        self.state_tx.send_replace(next.clone());
        let _ = self.events_tx.send(StoreEvent::Changed { action: kind });

        tracing::debug!(
            action = kind,
            entities = next.entities.len(),
            visible = next.filtered_entities.len(),
            "Media wall state updated"
        );
        next
    }

    /// Decode a JSON action and dispatch it
    pub fn dispatch_json(&self, json: &str) -> Result<Arc<MediaWallState>> {
        let action: MediaWallAction = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed media wall action");
            e
        })?;
        Ok(self.dispatch(action))
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<MediaWallState> {
        self.state.lock().clone()
    }

    /// Project the current snapshot through a selector
    pub fn select<T>(&self, selector: impl FnOnce(&MediaWallState) -> T) -> T {
        let snapshot = self.snapshot();
        selector(&snapshot)
    }

    /// Go back to the initial state (e.g., on session end)
    pub fn reset(&self) {
        let initial = Arc::new(MediaWallState::initial());
        let mut current = self.state.lock();
        *current = initial.clone();
        self.state_tx.send_replace(initial);
        let _ = self.events_tx.send(StoreEvent::Reset);
        tracing::info!("Media wall state reset");
    }

    /// Subscribe to snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<Arc<MediaWallState>> {
        self.state_tx.subscribe()
    }

    /// Subscribe to dispatch events
    pub fn subscribe_events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events_tx.subscribe()
    }
}
