//! Property tests for the room registry and room occupancy.

use innkeeper_room::{Guest, Room, RoomError, RoomNumber, RoomRegistry, RoomType};
use proptest::prelude::*;

// =========================================================================
// Strategies
// =========================================================================

fn room_type_strategy() -> impl Strategy<Value = RoomType> {
    prop_oneof![Just(RoomType::Standard), Just(RoomType::Suite)]
}

fn guest_name_strategy() -> impl Strategy<Value = String> {
    ".{0,24}"
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    /// Property: registering the same number twice fails the second time
    /// and leaves exactly one room with that number.
    #[test]
    fn duplicate_room_number_is_always_rejected(
        n in any::<u32>(),
        first in room_type_strategy(),
        second in room_type_strategy(),
    ) {
        let mut registry = RoomRegistry::new();
        registry.add_room(Room::new(n, first)).unwrap();

        let result = registry.add_room(Room::new(n, second));
        prop_assert!(matches!(result, Err(RoomError::DuplicateRoom(dup)) if dup == RoomNumber(n)));
        prop_assert_eq!(
            registry.rooms().iter().filter(|r| r.number() == RoomNumber(n)).count(),
            1
        );
        prop_assert_eq!(registry.get_room_by_number(RoomNumber(n)).unwrap().room_type(), first);
    }

    /// Property: check-in followed by check-out restores a vacant room
    /// with no guest, whatever the guest's name.
    #[test]
    fn check_in_then_out_restores_vacancy(
        n in any::<u32>(),
        room_type in room_type_strategy(),
        name in guest_name_strategy(),
    ) {
        let mut room = Room::new(n, room_type);
        prop_assert!(room.check_in(Guest::new(name.clone())));
        prop_assert_eq!(room.guest().map(Guest::name), Some(name.as_str()));

        prop_assert!(room.check_out());
        prop_assert!(!room.is_occupied());
        prop_assert!(room.guest().is_none());
    }

    /// Property: room numbers stay unique no matter what sequence of
    /// numbers is offered, and the listing keeps first-insertion order.
    #[test]
    fn registry_keeps_numbers_unique_in_insertion_order(
        numbers in prop::collection::vec(0u32..50, 0..40),
    ) {
        let mut registry = RoomRegistry::new();
        let mut expected: Vec<u32> = Vec::new();

        for n in numbers {
            let accepted = registry.add_room(Room::new(n, RoomType::Standard)).is_ok();
            prop_assert_eq!(accepted, !expected.contains(&n));
            if accepted {
                expected.push(n);
            }
        }

        let actual: Vec<u32> = registry.rooms().iter().map(|r| r.number().0).collect();
        prop_assert_eq!(actual, expected);
    }
}
