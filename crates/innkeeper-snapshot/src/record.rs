//! The persisted shape of a room.

use innkeeper_room::{Guest, Room, RoomNumber, RoomRegistry, RoomType};
use serde::{Deserialize, Serialize};

use crate::SnapshotError;

/// One room as it appears in a snapshot.
///
/// The type is kept as its raw tag so that every codec reports an
/// unrecognized tag the same way, through [`room_type`](Self::room_type),
/// instead of failing inside its own parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub room_number: RoomNumber,
    pub type_tag: String,
    pub occupied: bool,
    /// Empty when the room is vacant.
    pub guest_name: String,
}

impl RoomRecord {
    /// Captures the persisted fields of `room`.
    pub fn from_room(room: &Room) -> Self {
        Self {
            room_number: room.number(),
            type_tag: room.room_type().tag().to_string(),
            occupied: room.is_occupied(),
            guest_name: room
                .guest()
                .map(|g| g.name().to_string())
                .unwrap_or_default(),
        }
    }

    /// Resolves the tag to a [`RoomType`].
    ///
    /// # Errors
    /// Returns [`SnapshotError::UnknownRoomType`] for an unrecognized tag.
    pub fn room_type(&self) -> Result<RoomType, SnapshotError> {
        RoomType::from_tag(&self.type_tag)
            .ok_or_else(|| SnapshotError::UnknownRoomType(self.type_tag.clone()))
    }

    /// Adds the room to `rooms` and, if the record says it is occupied
    /// by a named guest, checks that guest in.
    ///
    /// A record marked occupied with an empty name restores as vacant.
    pub(crate) fn restore_into(
        self,
        rooms: &mut RoomRegistry,
    ) -> Result<&Room, SnapshotError> {
        let room_type = self.room_type()?;
        let room = rooms.add_room(Room::new(self.room_number, room_type))?;
        if self.occupied && !self.guest_name.is_empty() {
            room.check_in(Guest::new(self.guest_name));
        }
        Ok(room)
    }
}
