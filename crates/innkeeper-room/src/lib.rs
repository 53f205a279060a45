//! Room inventory for Innkeeper.
//!
//! This crate is the bottom layer of the workspace. It knows what a room
//! is, who can stay in it, and how the hotel's rooms are kept together,
//! but nothing about files or ancillary services.
//!
//! # Key types
//!
//! - [`RoomType`]: the closed set of room tiers and their fixed prices
//! - [`Room`]: one physical room and its occupancy
//! - [`Guest`]: a named occupant
//! - [`RoomRegistry`]: owns every room, keyed by a unique [`RoomNumber`]
//! - [`RoomError`]: the error taxonomy shared by every layer above

mod error;
mod registry;
mod room;
mod types;

pub use error::RoomError;
pub use registry::RoomRegistry;
pub use room::Room;
pub use types::{Guest, RoomNumber, RoomType, STANDARD_RATE, SUITE_RATE};
