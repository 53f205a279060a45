//! Error types for the room layer.
//!
//! These are the domain errors every caller sees, whichever layer raised
//! them. The front desk crate returns `RoomError` directly so that a
//! failed check-out and a failed service dispatch surface the same kind.

use crate::{RoomNumber, RoomType};

/// Errors raised by room registry, check-in/out, and service operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// A room with this number is already registered.
    #[error("room {0} already exists")]
    DuplicateRoom(RoomNumber),

    /// No vacant room of the requested type is left.
    #[error("no available room of type {0}")]
    Unavailable(RoomType),

    /// The room does not exist, or exists but has no guest.
    /// The two cases are reported identically.
    #[error("room {0} not found or not occupied")]
    NotFound(RoomNumber),
}
