//! Reservation time fixtures for creating in-memory test data.

use chrono::NaiveTime;
use entity::reservation_time;

/// Default start hour of a test time slot.
pub const DEFAULT_HOUR: u32 = 10;

/// Creates a reservation time entity model starting at 10:00.
///
/// # Returns
/// - `reservation_time::Model` - In-memory reservation time entity with id `1`
pub fn entity() -> reservation_time::Model {
    entity_builder().build()
}

/// Creates a reservation time entity builder for customization.
pub fn entity_builder() -> ReservationTimeEntityBuilder {
    ReservationTimeEntityBuilder::default()
}

/// Builder for creating customized reservation time entity models.
pub struct ReservationTimeEntityBuilder {
    id: i32,
    start_at: NaiveTime,
}

impl Default for ReservationTimeEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            start_at: NaiveTime::from_hms_opt(DEFAULT_HOUR, 0, 0).unwrap_or_default(),
        }
    }
}

impl ReservationTimeEntityBuilder {
    /// Sets the time slot ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the start time of the slot.
    ///
    /// # Arguments
    /// - `start_at` - Time of day the slot begins
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn start_at(mut self, start_at: NaiveTime) -> Self {
        self.start_at = start_at;
        self
    }

    /// Builds and returns the reservation time entity model.
    pub fn build(self) -> reservation_time::Model {
        reservation_time::Model {
            id: self.id,
            start_at: self.start_at,
        }
    }
}
