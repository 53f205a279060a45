//! Guest check-in and check-out against a room registry.
//!
//! ```text
//! check_in_guest(guest, type) ──→ [Occupied] ──→ check_out_guest(number) ──→ [Available]
//!        │
//!        └── no vacant room of that type ──→ RoomError::Unavailable
//! ```

use innkeeper_room::{Guest, Room, RoomError, RoomNumber, RoomRegistry, RoomType};

/// Check-in/check-out coordinator, borrowing the registry it works on.
///
/// Create one with [`GuestLifecycle::new`] whenever you need it. It holds
/// nothing but the borrow, so it is free to build and drop per call.
pub struct GuestLifecycle<'r> {
    rooms: &'r mut RoomRegistry,
}

impl<'r> GuestLifecycle<'r> {
    pub fn new(rooms: &'r mut RoomRegistry) -> Self {
        Self { rooms }
    }

    /// Assigns `guest` to the earliest-registered vacant room of
    /// `room_type` and returns that room.
    ///
    /// Consumes the view so the returned room can borrow the registry
    /// for `'r` directly.
    ///
    /// # Errors
    /// Returns [`RoomError::Unavailable`] if every room of that type is
    /// taken. Nothing is modified in that case.
    pub fn check_in_guest(
        self,
        guest: Guest,
        room_type: RoomType,
    ) -> Result<&'r Room, RoomError> {
        let rooms = self.rooms;
        let room = rooms
            .find_available_room_mut(room_type)
            .ok_or(RoomError::Unavailable(room_type))?;

        // The room was just found vacant, so this can't be refused.
        room.check_in(guest);

        tracing::info!(
            number = %room.number(),
            %room_type,
            guest = room.guest().map(Guest::name).unwrap_or_default(),
            "guest checked in"
        );
        Ok(room)
    }

    /// Releases the guest in room `number`.
    ///
    /// # Errors
    /// Returns [`RoomError::NotFound`] if the room doesn't exist or is
    /// already vacant.
    pub fn check_out_guest(&mut self, number: RoomNumber) -> Result<(), RoomError> {
        let room = self
            .rooms
            .get_room_by_number_mut(number)
            .filter(|r| r.is_occupied())
            .ok_or(RoomError::NotFound(number))?;

        room.check_out();
        tracing::info!(%number, "guest checked out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel() -> RoomRegistry {
        let mut rooms = RoomRegistry::new();
        rooms.add_room(Room::new(101, RoomType::Standard)).unwrap();
        rooms.add_room(Room::new(201, RoomType::Suite)).unwrap();
        rooms
    }

    #[test]
    fn test_check_in_assigns_matching_room() {
        let mut rooms = hotel();
        let room = GuestLifecycle::new(&mut rooms)
            .check_in_guest(Guest::new("John"), RoomType::Standard)
            .unwrap();

        assert_eq!(room.number(), RoomNumber(101));
        assert!(room.is_occupied());
        assert_eq!(room.guest().map(Guest::name), Some("John"));
    }

    #[test]
    fn test_check_in_unavailable_leaves_registry_unchanged() {
        let mut rooms = hotel();
        GuestLifecycle::new(&mut rooms)
            .check_in_guest(Guest::new("John"), RoomType::Standard)
            .unwrap();
        let before = rooms.list_rooms();

        let result = GuestLifecycle::new(&mut rooms)
            .check_in_guest(Guest::new("Jane"), RoomType::Standard);
        assert!(matches!(
            result,
            Err(RoomError::Unavailable(RoomType::Standard))
        ));
        assert_eq!(rooms.list_rooms(), before);
        assert!(!rooms.get_room_by_number(RoomNumber(201)).unwrap().is_occupied());
    }

    #[test]
    fn test_check_out_releases_room() {
        let mut rooms = hotel();
        GuestLifecycle::new(&mut rooms)
            .check_in_guest(Guest::new("John"), RoomType::Suite)
            .unwrap();

        GuestLifecycle::new(&mut rooms)
            .check_out_guest(RoomNumber(201))
            .unwrap();

        let room = rooms.get_room_by_number(RoomNumber(201)).unwrap();
        assert!(!room.is_occupied());
        assert!(room.guest().is_none());
    }

    #[test]
    fn test_check_out_absent_and_vacant_rooms_fail_identically() {
        let mut rooms = hotel();
        let mut desk = GuestLifecycle::new(&mut rooms);

        assert!(matches!(
            desk.check_out_guest(RoomNumber(999)),
            Err(RoomError::NotFound(RoomNumber(999)))
        ));
        assert!(matches!(
            desk.check_out_guest(RoomNumber(101)),
            Err(RoomError::NotFound(RoomNumber(101)))
        ));
    }
}
