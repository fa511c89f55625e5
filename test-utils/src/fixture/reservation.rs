//! Reservation fixtures for creating in-memory test data.

use chrono::{Days, NaiveDate, Utc};
use entity::reservation;

/// Default name the reservation is held under.
pub const DEFAULT_NAME: &str = "Guest";

/// Default time slot ID for reservations.
pub const DEFAULT_TIME_ID: i32 = 1;

/// Default theme ID for reservations.
pub const DEFAULT_THEME_ID: i32 = 1;

/// Creates a reservation entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Guest"`
/// - date: one week from today (UTC)
/// - time_id: `1`
/// - theme_id: `1`
pub fn entity() -> reservation::Model {
    entity_builder().build()
}

/// Creates a reservation entity builder for customization.
pub fn entity_builder() -> ReservationEntityBuilder {
    ReservationEntityBuilder::default()
}

/// Builder for creating customized reservation entity models.
pub struct ReservationEntityBuilder {
    id: i32,
    name: String,
    date: NaiveDate,
    time_id: i32,
    theme_id: i32,
}

impl Default for ReservationEntityBuilder {
    fn default() -> Self {
        let today = Utc::now().date_naive();
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            date: today.checked_add_days(Days::new(7)).unwrap_or(today),
            time_id: DEFAULT_TIME_ID,
            theme_id: DEFAULT_THEME_ID,
        }
    }
}

impl ReservationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the reservation date.
    ///
    /// Fixtures and factories do not validate dates, so past dates can be used to
    /// seed history for ranking tests.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn time_id(mut self, time_id: i32) -> Self {
        self.time_id = time_id;
        self
    }

    pub fn theme_id(mut self, theme_id: i32) -> Self {
        self.theme_id = theme_id;
        self
    }

    /// Builds and returns the reservation entity model.
    pub fn build(self) -> reservation::Model {
        reservation::Model {
            id: self.id,
            name: self.name,
            date: self.date,
            time_id: self.time_id,
            theme_id: self.theme_id,
        }
    }
}
