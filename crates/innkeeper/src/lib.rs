//! # Innkeeper
//!
//! Room inventory and guest lifecycle for a small hotel.
//!
//! The [`Hotel`] facade ties the layers together: a room registry, the
//! front desk (check-in/out and ancillary services), and flat-file
//! snapshots. Everything is synchronous and single-owner; wrap a `Hotel`
//! in your own lock if several threads need it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use innkeeper::prelude::*;
//!
//! # fn main() -> Result<(), HotelError> {
//! let mut hotel = Hotel::builder()
//!     .room(101, RoomType::Standard)
//!     .room(201, RoomType::Suite)
//!     .snapshot_path("hotel_data.txt")
//!     .build()?;
//!
//! let room = hotel.check_in_guest(Guest::new("John"), RoomType::Suite)?.number();
//! println!("{}", hotel.provide_room_service(room)?);
//! hotel.save()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod hotel;

pub use config::{HotelConfig, RoomSeed, SnapshotFormat};
pub use error::HotelError;
pub use hotel::{Hotel, HotelBuilder};

pub use innkeeper_desk::{FoodService, GuestLifecycle, RoomService, Service, ServiceDispatcher};
pub use innkeeper_room::{
    Guest, Room, RoomError, RoomNumber, RoomRegistry, RoomType, STANDARD_RATE, SUITE_RATE,
};
pub use innkeeper_snapshot::{
    JsonLinesCodec, LineCodec, RecordCodec, RoomRecord, SnapshotError, SnapshotStore,
};

/// The types most callers need, in one import.
pub mod prelude {
    pub use crate::{
        FoodService, Guest, Hotel, HotelBuilder, HotelConfig, HotelError, Room, RoomError,
        RoomNumber, RoomSeed, RoomService, RoomType, Service, SnapshotError, SnapshotFormat,
    };
}
