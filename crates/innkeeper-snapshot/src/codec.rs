//! Record codecs: one [`RoomRecord`] to one line of text, and back.
//!
//! The store doesn't care how a record is spelled. It hands each record
//! to a [`RecordCodec`] and writes whatever comes back as one line. That
//! keeps the load/save rules (clear first, restore in order, fail fast)
//! in one place while the format stays swappable.
//!
//! [`LineCodec`] is the comma-separated format and the default.
//! [`JsonLinesCodec`] writes one JSON object per line and is behind the
//! `json` feature (enabled by default).

use crate::{RoomRecord, SnapshotError};

/// Field separator for [`LineCodec`].
const DELIMITER: char = ',';

/// Literal written for an occupied room. Anything else reads as vacant.
const TRUE_LITERAL: &str = "True";
const FALSE_LITERAL: &str = "False";

const FIELD_COUNT: usize = 4;

/// Converts single records to and from single lines.
///
/// Implementations must never emit a line break inside an encoded
/// record, or the store will split it into two lines on load.
pub trait RecordCodec {
    /// Encodes `record` as one line, without the trailing newline.
    ///
    /// # Errors
    /// Returns an error if the record can't be represented in this format.
    fn encode(&self, record: &RoomRecord) -> Result<String, SnapshotError>;

    /// Decodes one line (trailing newline already removed).
    ///
    /// # Errors
    /// Returns [`SnapshotError::Malformed`] if the line isn't a record in
    /// this format. The room type tag is not checked here.
    fn decode(&self, line: &str) -> Result<RoomRecord, SnapshotError>;
}

impl<C: RecordCodec + ?Sized> RecordCodec for Box<C> {
    fn encode(&self, record: &RoomRecord) -> Result<String, SnapshotError> {
        (**self).encode(record)
    }

    fn decode(&self, line: &str) -> Result<RoomRecord, SnapshotError> {
        (**self).decode(line)
    }
}

// ---------------------------------------------------------------------------
// LineCodec
// ---------------------------------------------------------------------------

/// The comma-separated snapshot format:
///
/// ```text
/// 101,StandardRoom,False,
/// 201,SuiteRoom,True,John
/// ```
///
/// No escaping, and lines are trimmed on load. Both limits hit guest
/// names, and each is logged as a warning when the record is written:
///
/// - A name containing a comma or a line break fails to load.
/// - Trailing whitespace is lost, so `"Ann "` reloads as `"Ann"`.
/// - An occupied room whose name is empty or all whitespace reloads as
///   vacant.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCodec;

impl LineCodec {
    /// How `name` would be damaged by a save/load cycle, if at all.
    fn name_loss(name: &str, occupied: bool) -> Option<&'static str> {
        if name.contains([DELIMITER, '\n', '\r']) {
            Some("guest name contains a field delimiter or line break; snapshot will not reload")
        } else if occupied && name.trim().is_empty() {
            Some("guest name is blank; room will reload as vacant")
        } else if name.trim_end() != name {
            Some("guest name has trailing whitespace; it will be trimmed on reload")
        } else {
            None
        }
    }
}

impl RecordCodec for LineCodec {
    fn encode(&self, record: &RoomRecord) -> Result<String, SnapshotError> {
        if let Some(problem) = Self::name_loss(&record.guest_name, record.occupied) {
            tracing::warn!(
                room = %record.room_number,
                guest = ?record.guest_name,
                "{problem}"
            );
        }

        let occupied = if record.occupied {
            TRUE_LITERAL
        } else {
            FALSE_LITERAL
        };
        Ok(format!(
            "{number}{DELIMITER}{tag}{DELIMITER}{occupied}{DELIMITER}{guest}",
            number = record.room_number,
            tag = record.type_tag,
            guest = record.guest_name,
        ))
    }

    fn decode(&self, line: &str) -> Result<RoomRecord, SnapshotError> {
        let fields: Vec<&str> = line.trim().split(DELIMITER).collect();
        let &[number, tag, occupied, guest] = fields.as_slice() else {
            return Err(SnapshotError::malformed(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            )));
        };

        let room_number = number.parse::<u32>().map_err(|e| {
            SnapshotError::malformed(format!("invalid room number {number:?}: {e}"))
        })?;

        Ok(RoomRecord {
            room_number: room_number.into(),
            type_tag: tag.to_string(),
            occupied: occupied == TRUE_LITERAL,
            guest_name: guest.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// JsonLinesCodec
// ---------------------------------------------------------------------------

/// One JSON object per line, with the same four fields as [`LineCodec`]:
///
/// ```text
/// {"room_number":201,"type_tag":"SuiteRoom","occupied":true,"guest_name":"John"}
/// ```
///
/// JSON escapes commas and line breaks inside strings, so any guest name
/// survives a round trip.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesCodec;

#[cfg(feature = "json")]
impl RecordCodec for JsonLinesCodec {
    fn encode(&self, record: &RoomRecord) -> Result<String, SnapshotError> {
        serde_json::to_string(record).map_err(SnapshotError::Encode)
    }

    fn decode(&self, line: &str) -> Result<RoomRecord, SnapshotError> {
        serde_json::from_str(line.trim())
            .map_err(|e| SnapshotError::malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeeper_room::RoomNumber;

    fn record(number: u32, tag: &str, occupied: bool, guest: &str) -> RoomRecord {
        RoomRecord {
            room_number: RoomNumber(number),
            type_tag: tag.to_string(),
            occupied,
            guest_name: guest.to_string(),
        }
    }

    #[test]
    fn test_line_encode_vacant_and_occupied() {
        assert_eq!(
            LineCodec.encode(&record(101, "StandardRoom", false, "")).unwrap(),
            "101,StandardRoom,False,"
        );
        assert_eq!(
            LineCodec.encode(&record(201, "SuiteRoom", true, "John")).unwrap(),
            "201,SuiteRoom,True,John"
        );
    }

    #[test]
    fn test_line_decode_trims_surrounding_whitespace() {
        assert_eq!(
            LineCodec.decode("  201,SuiteRoom,True,John \r").unwrap(),
            record(201, "SuiteRoom", true, "John")
        );
    }

    #[test]
    fn test_line_names_damaged_by_reload_are_flagged() {
        assert!(LineCodec::name_loss("Smith, John", true).is_some());
        assert!(LineCodec::name_loss("", true).is_some());
        assert!(LineCodec::name_loss("  ", true).is_some());
        assert!(LineCodec::name_loss("Ann ", true).is_some());

        assert!(LineCodec::name_loss("Ann", true).is_none());
        assert!(LineCodec::name_loss(" Ann", true).is_none());
        assert!(LineCodec::name_loss("", false).is_none());
    }

    #[test]
    fn test_line_decode_drops_trailing_name_whitespace() {
        let line = LineCodec.encode(&record(2, "SuiteRoom", true, "Ann ")).unwrap();
        assert_eq!(LineCodec.decode(&line).unwrap().guest_name, "Ann");

        let line = LineCodec.encode(&record(1, "SuiteRoom", true, "  ")).unwrap();
        assert_eq!(LineCodec.decode(&line).unwrap().guest_name, "");
    }

    #[test]
    fn test_line_decode_keeps_unknown_tag_for_later() {
        let decoded = LineCodec.decode("7,Penthouse,False,").unwrap();
        assert_eq!(decoded.type_tag, "Penthouse");
    }

    #[test]
    fn test_line_decode_only_true_literal_is_occupied() {
        assert!(LineCodec.decode("1,SuiteRoom,True,A").unwrap().occupied);
        assert!(!LineCodec.decode("1,SuiteRoom,False,A").unwrap().occupied);
        assert!(!LineCodec.decode("1,SuiteRoom,true,A").unwrap().occupied);
        assert!(!LineCodec.decode("1,SuiteRoom,yes,A").unwrap().occupied);
    }

    #[test]
    fn test_line_decode_wrong_field_count() {
        for line in ["101,StandardRoom,False", "101", "101,StandardRoom,True,Smith, John"] {
            assert!(
                matches!(LineCodec.decode(line), Err(SnapshotError::Malformed { .. })),
                "{line:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_line_decode_bad_room_number() {
        for line in ["abc,StandardRoom,False,", "-1,StandardRoom,False,", ",SuiteRoom,False,"] {
            assert!(
                matches!(LineCodec.decode(line), Err(SnapshotError::Malformed { .. })),
                "{line:?} should be malformed"
            );
        }
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_lines_shape() {
        let line = JsonLinesCodec
            .encode(&record(201, "SuiteRoom", true, "John"))
            .unwrap();
        assert_eq!(
            line,
            r#"{"room_number":201,"type_tag":"SuiteRoom","occupied":true,"guest_name":"John"}"#
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_lines_escapes_delimiters_in_names() {
        let original = record(3, "StandardRoom", true, "Smith, John\nJr.");
        let line = JsonLinesCodec.encode(&original).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(JsonLinesCodec.decode(&line).unwrap(), original);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_lines_decode_garbage_is_malformed() {
        assert!(matches!(
            JsonLinesCodec.decode("101,StandardRoom,False,"),
            Err(SnapshotError::Malformed { .. })
        ));
    }
}
