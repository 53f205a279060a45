//! Service dispatch: gate a service on room occupancy, then run it.

use innkeeper_room::{RoomError, RoomNumber, RoomRegistry};

use crate::Service;

/// Runs ancillary services for occupied rooms.
///
/// Holds a shared borrow of the registry, so it is `Copy` and never
/// changes room state.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDispatcher<'r> {
    rooms: &'r RoomRegistry,
}

impl<'r> ServiceDispatcher<'r> {
    pub fn new(rooms: &'r RoomRegistry) -> Self {
        Self { rooms }
    }

    /// Invokes `service` for room `number` and returns its output
    /// verbatim.
    ///
    /// # Errors
    /// Returns [`RoomError::NotFound`] if the room doesn't exist or has
    /// no guest. The service is not invoked in that case.
    pub fn provide_service<S>(
        &self,
        number: RoomNumber,
        service: &S,
    ) -> Result<String, RoomError>
    where
        S: Service + ?Sized,
    {
        let occupied = self
            .rooms
            .get_room_by_number(number)
            .is_some_and(|r| r.is_occupied());
        if !occupied {
            return Err(RoomError::NotFound(number));
        }

        let output = service.provide_service();
        tracing::debug!(%number, %output, "service provided");
        Ok(output)
    }
}
