//! Front desk operations for Innkeeper.
//!
//! This crate sits on top of the room layer and handles what happens to
//! guests once the rooms exist:
//!
//! 1. **Check-in / check-out**: [`GuestLifecycle`] finds a vacant room of
//!    the requested type and assigns the guest, or releases a room
//! 2. **Ancillary services**: [`ServiceDispatcher`] makes sure a room is
//!    occupied, then runs a [`Service`] for it
//!
//! # How it fits in the stack
//!
//! ```text
//! Hotel facade (above)  ← builds a desk view per call
//!     ↕
//! Desk layer (this crate)  ← guest lifecycle, service dispatch
//!     ↕
//! Room layer (below)  ← RoomRegistry, Room, Guest, RoomError
//! ```
//!
//! Both types borrow a [`RoomRegistry`](innkeeper_room::RoomRegistry)
//! rather than owning one, so any number of them can be pointed at the
//! same inventory over time. Every failure is a
//! [`RoomError`](innkeeper_room::RoomError).

mod dispatch;
mod lifecycle;
mod service;

pub use dispatch::ServiceDispatcher;
pub use lifecycle::GuestLifecycle;
pub use service::{FoodService, RoomService, Service};
