//! Unified error type for the Innkeeper facade.

use innkeeper_room::RoomError;
use innkeeper_snapshot::SnapshotError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attributes let `?` convert sub-crate errors, and
/// `#[error(transparent)]` keeps their messages unchanged.
#[derive(Debug, thiserror::Error)]
pub enum HotelError {
    /// A registry, check-in/out, or service error.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// A snapshot save/load error.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The configuration file could not be read.
    #[error("cannot read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`HotelConfig`](crate::HotelConfig).
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl HotelError {
    /// Returns the wrapped [`RoomError`], if this is one.
    pub fn as_room_error(&self) -> Option<&RoomError> {
        match self {
            Self::Room(e) => Some(e),
            Self::Snapshot(SnapshotError::Room(e)) => Some(e),
            _ => None,
        }
    }
}
