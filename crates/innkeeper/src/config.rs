//! Hotel configuration: initial inventory and where snapshots live.

use std::path::{Path, PathBuf};

use innkeeper_room::{RoomNumber, RoomType};
use innkeeper_snapshot::{JsonLinesCodec, LineCodec, RecordCodec};
use serde::{Deserialize, Serialize};

use crate::HotelError;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "hotel_data.txt";

// ---------------------------------------------------------------------------
// HotelConfig
// ---------------------------------------------------------------------------

/// Settings for a [`Hotel`](crate::Hotel).
///
/// Every field has a default, and `#[serde(default)]` fills in whatever
/// a JSON file leaves out, so `{}` is a valid configuration:
///
/// ```json
/// {
///   "snapshot_path": "hotel_data.txt",
///   "snapshot_format": "line",
///   "rooms": [
///     { "number": 101, "room_type": "Standard" },
///     { "number": 201, "room_type": "Suite" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// File used by [`Hotel::save`](crate::Hotel::save) and
    /// [`Hotel::load`](crate::Hotel::load).
    pub snapshot_path: PathBuf,

    /// Record format for snapshots.
    pub snapshot_format: SnapshotFormat,

    /// Rooms registered when the hotel is built, in listing order.
    pub rooms: Vec<RoomSeed>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            snapshot_format: SnapshotFormat::default(),
            rooms: Vec::new(),
        }
    }
}

impl HotelConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, HotelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, HotelError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

// ---------------------------------------------------------------------------
// RoomSeed
// ---------------------------------------------------------------------------

/// A room to register at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSeed {
    pub number: RoomNumber,
    pub room_type: RoomType,
}

// ---------------------------------------------------------------------------
// SnapshotFormat
// ---------------------------------------------------------------------------

/// Which record codec snapshots use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapshotFormat {
    /// `101,StandardRoom,False,` per line.
    #[default]
    Line,
    /// One JSON object per line.
    JsonLines,
}

impl SnapshotFormat {
    pub(crate) fn codec(self) -> Box<dyn RecordCodec> {
        match self {
            Self::Line => Box::new(LineCodec),
            Self::JsonLines => Box::new(JsonLinesCodec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HotelConfig::default();
        assert_eq!(config.snapshot_path, PathBuf::from("hotel_data.txt"));
        assert_eq!(config.snapshot_format, SnapshotFormat::Line);
        assert!(config.rooms.is_empty());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(HotelConfig::from_json_str("{}").unwrap(), HotelConfig::default());
    }

    #[test]
    fn test_full_json_config() {
        let config = HotelConfig::from_json_str(
            r#"{
                "snapshot_path": "/tmp/rooms.jsonl",
                "snapshot_format": "json-lines",
                "rooms": [
                    { "number": 101, "room_type": "Standard" },
                    { "number": 201, "room_type": "Suite" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/rooms.jsonl"));
        assert_eq!(config.snapshot_format, SnapshotFormat::JsonLines);
        assert_eq!(
            config.rooms,
            vec![
                RoomSeed { number: RoomNumber(101), room_type: RoomType::Standard },
                RoomSeed { number: RoomNumber(201), room_type: RoomType::Suite },
            ]
        );
    }

    #[test]
    fn test_unknown_room_type_in_config_is_rejected() {
        let result = HotelConfig::from_json_str(
            r#"{ "rooms": [ { "number": 1, "room_type": "Penthouse" } ] }"#,
        );
        assert!(matches!(result, Err(HotelError::Config(_))));
    }
}
