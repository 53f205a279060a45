//! The `Service` trait: the extension point for ancillary services.
//!
//! A service is anything that can be asked to do its job for a room and
//! report what it did. The dispatcher never looks inside one; it only
//! checks the room and calls [`Service::provide_service`].

/// A capability that performs an ancillary service and describes it.
///
/// Configuration belongs to the implementer and is bound at construction
/// (see [`FoodService`]), so the call itself takes no arguments.
///
/// Plain closures returning a `String` are services too, which is handy
/// for one-off services and test doubles:
///
/// ```rust
/// use innkeeper_desk::Service;
///
/// let laundry = || "Laundry collected.".to_string();
/// assert_eq!(laundry.provide_service(), "Laundry collected.");
/// ```
pub trait Service {
    /// Performs the service and returns a description of what was done.
    fn provide_service(&self) -> String;
}

impl<F> Service for F
where
    F: Fn() -> String,
{
    fn provide_service(&self) -> String {
        self()
    }
}

/// Housekeeping-style room service with a fixed message.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomService;

impl Service for RoomService {
    fn provide_service(&self) -> String {
        "Room service has been provided.".to_string()
    }
}

/// Food delivery, parameterized by what is being delivered.
#[derive(Debug, Clone)]
pub struct FoodService {
    food_type: String,
}

impl FoodService {
    pub fn new(food_type: impl Into<String>) -> Self {
        Self {
            food_type: food_type.into(),
        }
    }

    pub fn food_type(&self) -> &str {
        &self.food_type
    }
}

impl Service for FoodService {
    fn provide_service(&self) -> String {
        format!("Food service has been provided with {}.", self.food_type)
    }
}
