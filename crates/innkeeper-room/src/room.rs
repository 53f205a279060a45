//! A single physical room and its occupancy.
//!
//! Occupancy is stored as `Option<Guest>`: a room is occupied exactly
//! when it holds a guest, so the two can never disagree.

use std::fmt;

use crate::{Guest, RoomNumber, RoomType};

/// One room in the hotel.
///
/// The number and type are fixed at construction. The only mutations are
/// [`check_in`](Self::check_in) and [`check_out`](Self::check_out).
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    guest: Option<Guest>,
}

impl Room {
    /// Creates a vacant room.
    pub fn new(number: impl Into<RoomNumber>, room_type: RoomType) -> Self {
        Self {
            number: number.into(),
            room_type,
            guest: None,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the nightly rate, which depends only on the room type.
    pub fn price(&self) -> f64 {
        self.room_type.price()
    }

    pub fn is_occupied(&self) -> bool {
        self.guest.is_some()
    }

    /// The current occupant, if any.
    pub fn guest(&self) -> Option<&Guest> {
        self.guest.as_ref()
    }

    /// Puts `guest` in the room.
    ///
    /// Returns `false` and leaves the room untouched if it is already
    /// occupied. The rejected guest is dropped; callers that want to
    /// retry elsewhere should keep their own copy.
    pub fn check_in(&mut self, guest: Guest) -> bool {
        if self.guest.is_some() {
            return false;
        }
        self.guest = Some(guest);
        true
    }

    /// Releases the current occupant.
    ///
    /// Returns `false` if the room was already vacant.
    pub fn check_out(&mut self) -> bool {
        self.guest.take().is_some()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_occupied() {
            "Occupied"
        } else {
            "Available"
        };
        write!(
            f,
            "<Room {}: {}, Price={:.1}>",
            self.number,
            status,
            self.price()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_is_vacant() {
        let room = Room::new(101, RoomType::Standard);
        assert_eq!(room.number(), RoomNumber(101));
        assert_eq!(room.room_type(), RoomType::Standard);
        assert!(!room.is_occupied());
        assert!(room.guest().is_none());
    }

    #[test]
    fn test_price_follows_type() {
        assert_eq!(Room::new(1, RoomType::Standard).price(), 100.0);
        assert_eq!(Room::new(2, RoomType::Suite).price(), 250.0);
    }

    #[test]
    fn test_check_in_vacant_room() {
        let mut room = Room::new(101, RoomType::Standard);
        assert!(room.check_in(Guest::new("John")));
        assert!(room.is_occupied());
        assert_eq!(room.guest().map(Guest::name), Some("John"));
    }

    #[test]
    fn test_check_in_occupied_room_is_rejected_without_mutation() {
        let mut room = Room::new(101, RoomType::Standard);
        room.check_in(Guest::new("John"));

        assert!(!room.check_in(Guest::new("Jane")));
        assert_eq!(room.guest().map(Guest::name), Some("John"));
    }

    #[test]
    fn test_check_out_releases_guest() {
        let mut room = Room::new(201, RoomType::Suite);
        room.check_in(Guest::new("John"));

        assert!(room.check_out());
        assert!(!room.is_occupied());
        assert!(room.guest().is_none());
    }

    #[test]
    fn test_check_out_vacant_room_returns_false() {
        let mut room = Room::new(201, RoomType::Suite);
        assert!(!room.check_out());
        assert!(!room.is_occupied());
    }

    #[test]
    fn test_display_shows_number_status_and_price() {
        let mut room = Room::new(101, RoomType::Standard);
        assert_eq!(room.to_string(), "<Room 101: Available, Price=100.0>");

        room.check_in(Guest::new("John"));
        assert_eq!(room.to_string(), "<Room 101: Occupied, Price=100.0>");

        let suite = Room::new(201, RoomType::Suite);
        assert_eq!(suite.to_string(), "<Room 201: Available, Price=250.0>");
    }
}
