//! Media wall moderation
//!
//! Re-exports the moderation filters and the media wall state slice, and
//! sets up logging for hosts that embed them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_state;
pub use moderation;

pub use app_state::{
    ApiOutcome, MediaWallAction, MediaWallConfig, MediaWallReducer, MediaWallState,
    MediaWallStore, StoreEvent,
};
pub use moderation::{PostAccount, WallPost};

use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive`. Returns `false` if a
/// subscriber was already installed.
pub fn init_logging(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
