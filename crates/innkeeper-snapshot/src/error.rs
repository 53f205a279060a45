//! Error types for the snapshot layer.

use innkeeper_room::RoomError;

/// Errors that can occur while saving or loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Opening, reading, or writing the snapshot failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be split into a valid record: wrong number of
    /// fields, a non-numeric room number, or (JSON) invalid syntax.
    ///
    /// `line` is 1-based. Codecs report `0` and the store fills in the
    /// real position.
    #[error("malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The record's room type tag is not one Innkeeper knows.
    #[error("unknown room type tag {0:?}")]
    UnknownRoomType(String),

    /// Restoring a record broke a registry rule, e.g. the file lists the
    /// same room number twice.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// Serializing a record to JSON failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),
}

impl SnapshotError {
    /// Shorthand for a codec-level [`Malformed`](Self::Malformed) error
    /// whose position isn't known yet.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            line: 0,
            reason: reason.into(),
        }
    }

    /// Attaches a 1-based line number to a `Malformed` error. Other
    /// variants pass through unchanged.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::Malformed { reason, .. } => Self::Malformed { line, reason },
            other => other,
        }
    }
}
