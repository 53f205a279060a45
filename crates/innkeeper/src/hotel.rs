//! The `Hotel` facade and its builder.
//!
//! `Hotel` owns the room registry and its snapshot store, and lends the
//! registry to the front desk for the length of each call. It adds no
//! rules of its own; every operation delegates to one layer below.

use std::path::{Path, PathBuf};

use innkeeper_desk::{FoodService, GuestLifecycle, RoomService, Service, ServiceDispatcher};
use innkeeper_room::{Guest, Room, RoomNumber, RoomRegistry, RoomType};
use innkeeper_snapshot::{RecordCodec, SnapshotStore};

use crate::{HotelConfig, HotelError, RoomSeed, SnapshotFormat};

/// Builder for configuring a [`Hotel`].
///
/// # Example
///
/// ```rust
/// use innkeeper::prelude::*;
///
/// let hotel = Hotel::builder()
///     .room(101, RoomType::Standard)
///     .room(201, RoomType::Suite)
///     .build()
///     .unwrap();
/// assert_eq!(hotel.list_rooms().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HotelBuilder {
    config: HotelConfig,
}

impl HotelBuilder {
    /// Creates a builder with default settings and no rooms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all settings, including any rooms added so far.
    pub fn config(mut self, config: HotelConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the snapshot file.
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = path.into();
        self
    }

    /// Sets the snapshot record format.
    pub fn snapshot_format(mut self, format: SnapshotFormat) -> Self {
        self.config.snapshot_format = format;
        self
    }

    /// Queues a room to register on [`build`](Self::build).
    pub fn room(mut self, number: impl Into<RoomNumber>, room_type: RoomType) -> Self {
        self.config.rooms.push(RoomSeed {
            number: number.into(),
            room_type,
        });
        self
    }

    /// Registers the queued rooms and returns the hotel.
    ///
    /// # Errors
    /// Returns [`RoomError::DuplicateRoom`](innkeeper_room::RoomError::DuplicateRoom)
    /// if two seeded rooms share a number.
    pub fn build(self) -> Result<Hotel, HotelError> {
        let HotelConfig {
            snapshot_path,
            snapshot_format,
            rooms: seeds,
        } = self.config;

        let mut rooms = RoomRegistry::new();
        for seed in seeds {
            rooms.add_room(Room::new(seed.number, seed.room_type))?;
        }

        tracing::info!(
            rooms = rooms.len(),
            snapshot = %snapshot_path.display(),
            "hotel ready"
        );
        Ok(Hotel {
            rooms,
            snapshots: SnapshotStore::with_codec(snapshot_path, snapshot_format.codec()),
        })
    }
}

/// One hotel: its rooms, its front desk, and its snapshot store. The
/// store keeps the configured path and codec for the hotel's lifetime.
pub struct Hotel {
    rooms: RoomRegistry,
    snapshots: SnapshotStore<Box<dyn RecordCodec>>,
}

impl Hotel {
    /// Creates an empty hotel with default settings.
    pub fn new() -> Self {
        Self {
            rooms: RoomRegistry::new(),
            snapshots: SnapshotStore::with_codec(
                HotelConfig::default().snapshot_path,
                SnapshotFormat::default().codec(),
            ),
        }
    }

    /// Creates a new builder.
    pub fn builder() -> HotelBuilder {
        HotelBuilder::new()
    }

    /// Builds a hotel from a configuration.
    pub fn from_config(config: HotelConfig) -> Result<Self, HotelError> {
        HotelBuilder::new().config(config).build()
    }

    // -- Registry ----------------------------------------------------------

    /// Registers a room. See [`RoomRegistry::add_room`].
    pub fn add_room(&mut self, room: Room) -> Result<&Room, HotelError> {
        Ok(&*self.rooms.add_room(room)?)
    }

    /// Looks up a room by number.
    pub fn room(&self, number: impl Into<RoomNumber>) -> Option<&Room> {
        self.rooms.get_room_by_number(number.into())
    }

    /// Renders every room in insertion order.
    pub fn list_rooms(&self) -> Vec<String> {
        self.rooms.list_rooms()
    }

    /// Read-only access to the registry.
    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    // -- Front desk --------------------------------------------------------

    /// Checks `guest` into the first vacant room of `room_type`.
    pub fn check_in_guest(
        &mut self,
        guest: Guest,
        room_type: RoomType,
    ) -> Result<&Room, HotelError> {
        Ok(GuestLifecycle::new(&mut self.rooms).check_in_guest(guest, room_type)?)
    }

    /// Checks out whoever is in room `number`.
    pub fn check_out_guest(&mut self, number: impl Into<RoomNumber>) -> Result<(), HotelError> {
        Ok(GuestLifecycle::new(&mut self.rooms).check_out_guest(number.into())?)
    }

    /// Runs any [`Service`] for an occupied room.
    pub fn provide_service<S>(
        &self,
        number: impl Into<RoomNumber>,
        service: &S,
    ) -> Result<String, HotelError>
    where
        S: Service + ?Sized,
    {
        Ok(ServiceDispatcher::new(&self.rooms).provide_service(number.into(), service)?)
    }

    /// Sends room service to an occupied room.
    pub fn provide_room_service(&self, number: impl Into<RoomNumber>) -> Result<String, HotelError> {
        self.provide_service(number, &RoomService)
    }

    /// Delivers `food_type` to an occupied room.
    pub fn provide_food(
        &self,
        number: impl Into<RoomNumber>,
        food_type: &str,
    ) -> Result<String, HotelError> {
        self.provide_service(number, &FoodService::new(food_type))
    }

    // -- Snapshots ---------------------------------------------------------

    /// The configured snapshot file.
    pub fn snapshot_path(&self) -> &Path {
        self.snapshots.path()
    }

    /// Saves to the configured snapshot file.
    pub fn save(&self) -> Result<usize, HotelError> {
        Ok(self.snapshots.save(&self.rooms)?)
    }

    /// Replaces all rooms with the configured snapshot file's contents.
    pub fn load(&mut self) -> Result<usize, HotelError> {
        Ok(self.snapshots.load(&mut self.rooms)?)
    }

    /// Saves to `path` in the configured format.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<usize, HotelError> {
        Ok(self.snapshots.save_at(&self.rooms, path.as_ref())?)
    }

    /// Replaces all rooms with the contents of `path`.
    ///
    /// On error the registry holds only the rooms restored before the
    /// failing line. Reload a known-good snapshot to recover.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<usize, HotelError> {
        Ok(self.snapshots.load_at(&mut self.rooms, path.as_ref())?)
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}
