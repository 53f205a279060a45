//! Room registry: owns every room and keeps room numbers unique.

use crate::{Room, RoomError, RoomNumber, RoomType};

/// The hotel's room inventory.
///
/// Rooms are kept in a `Vec` so that listing, availability search, and
/// snapshots all follow insertion order. Lookups are linear; a small
/// hotel doesn't need an index, and keeping one in sync with the `Vec`
/// would be a second source of truth.
///
/// ## Invariant
///
/// No two rooms share a [`RoomNumber`]. [`add_room`](Self::add_room) is
/// the only way in, and it checks before appending.
///
/// The registry does no internal locking. It is meant to be owned by one
/// caller and mutated through `&mut self`.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Registers a room at the end of the listing order.
    ///
    /// # Errors
    /// Returns [`RoomError::DuplicateRoom`] if a room with the same number
    /// is already registered. The registry is not modified in that case.
    pub fn add_room(&mut self, room: Room) -> Result<&mut Room, RoomError> {
        let number = room.number();
        if self.contains(number) {
            return Err(RoomError::DuplicateRoom(number));
        }

        tracing::debug!(%number, room_type = %room.room_type(), "room added");
        let index = self.rooms.len();
        self.rooms.push(room);
        Ok(&mut self.rooms[index])
    }

    /// Returns the earliest-registered vacant room of `room_type`, or
    /// `None` if every room of that type is taken (or none exist).
    pub fn find_available_room(&self, room_type: RoomType) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|r| r.room_type() == room_type && !r.is_occupied())
    }

    /// Mutable variant of [`find_available_room`](Self::find_available_room),
    /// with the same tie-break.
    pub fn find_available_room_mut(
        &mut self,
        room_type: RoomType,
    ) -> Option<&mut Room> {
        self.rooms
            .iter_mut()
            .find(|r| r.room_type() == room_type && !r.is_occupied())
    }

    /// Looks up a room by number.
    pub fn get_room_by_number(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    /// Mutable lookup by number.
    pub fn get_room_by_number_mut(
        &mut self,
        number: RoomNumber,
    ) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number() == number)
    }

    /// Returns `true` if a room with this number is registered.
    pub fn contains(&self, number: RoomNumber) -> bool {
        self.get_room_by_number(number).is_some()
    }

    /// Renders every room, in insertion order, as
    /// `<Room N: Available|Occupied, Price=P>`.
    pub fn list_rooms(&self) -> Vec<String> {
        self.rooms.iter().map(Room::to_string).collect()
    }

    /// All rooms, in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Drops every room and, with them, every guest association.
    pub fn clear_rooms(&mut self) {
        let dropped = self.rooms.len();
        self.rooms.clear();
        tracing::debug!(dropped, "registry cleared");
    }

    /// Returns the number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no rooms are registered.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
