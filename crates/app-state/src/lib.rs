//! Application state management for the media wall
//!
//! This crate provides the media wall state slice: the immutable state
//! snapshot, the actions that transform it, the selectors that read it and
//! the store that publishes new snapshots to observers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod media_wall;
pub mod store;

pub use config::{ConfigError, MediaWallConfig};
pub use media_wall::{ApiOutcome, MediaWallAction, MediaWallReducer, MediaWallState};
pub use store::{MediaWallStore, StoreError, StoreEvent};
