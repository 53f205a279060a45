//! Registry snapshots for Innkeeper.
//!
//! A snapshot is a plain-text dump of every room in a
//! [`RoomRegistry`](innkeeper_room::RoomRegistry), one record per line,
//! in registry order. Loading one replaces the registry's contents.
//!
//! - **Records** ([`RoomRecord`]): the four persisted fields of a room.
//! - **Codecs** ([`RecordCodec`] trait, [`LineCodec`], [`JsonLinesCodec`]):
//!   how one record becomes one line and back.
//! - **Store** ([`SnapshotStore`]): save/load against a file or any
//!   reader/writer.
//! - **Errors** ([`SnapshotError`]): I/O, malformed lines, unknown room
//!   types, and duplicate rooms found in a file.
//!
//! # Format
//!
//! The default [`LineCodec`] writes
//!
//! ```text
//! <roomNumber>,<StandardRoom|SuiteRoom>,<True|False>,<guestName or empty>
//! ```
//!
//! Guest names are not escaped. A name containing a comma or a line
//! break is written as-is and will not load back.
//!
//! Snapshots are best effort. A failed save can leave a partial file and
//! a failed load leaves the registry cleared and partially refilled.

mod codec;
mod error;
mod record;
mod store;

pub use codec::{LineCodec, RecordCodec};
#[cfg(feature = "json")]
pub use codec::JsonLinesCodec;
pub use error::SnapshotError;
pub use record::RoomRecord;
pub use store::SnapshotStore;
