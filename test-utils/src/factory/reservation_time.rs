//! Reservation time factory for creating test time slot entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test time slots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation_time::ReservationTimeFactory;
///
/// let slot = ReservationTimeFactory::new(&db)
///     .start_at(NaiveTime::from_hms_opt(13, 30, 0).unwrap())
///     .build()
///     .await?;
/// ```
pub struct ReservationTimeFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::reservation_time::Model,
}

impl<'a> ReservationTimeFactory<'a> {
    /// Creates a new ReservationTimeFactory with a unique default start time.
    ///
    /// The start time is derived from the shared counter so that slots created in the
    /// same test never collide on the unique `start_at` column. Default slots always
    /// carry a non-zero seconds component and therefore never clash with slots created
    /// through `create_reservation_time_at`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let minutes = (id % (24 * 60)) as u32;
        let seconds = 1 + (id % 59) as u32;
        let start_at =
            NaiveTime::from_hms_opt(minutes / 60, minutes % 60, seconds).unwrap_or_default();
        let entity = fixture::reservation_time::entity_builder()
            .start_at(start_at)
            .build();

        Self { db, entity }
    }

    /// Sets the slot start time.
    ///
    /// # Arguments
    /// - `start_at` - Time of day the slot begins
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_at(mut self, start_at: NaiveTime) -> Self {
        self.entity.start_at = start_at;
        self
    }

    /// Builds and inserts the time slot entity into the database.
    pub async fn build(self) -> Result<entity::reservation_time::Model, DbErr> {
        entity::reservation_time::ActiveModel {
            id: ActiveValue::NotSet,
            start_at: ActiveValue::Set(self.entity.start_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a time slot with a unique default start time.
pub async fn create_reservation_time(
    db: &DatabaseConnection,
) -> Result<entity::reservation_time::Model, DbErr> {
    ReservationTimeFactory::new(db).build().await
}

/// Creates a time slot starting at the given hour and minute.
///
/// # Arguments
/// - `db` - Database connection
/// - `hour` - Hour of day (0-23)
/// - `minute` - Minute of hour (0-59)
pub async fn create_reservation_time_at(
    db: &DatabaseConnection,
    hour: u32,
    minute: u32,
) -> Result<entity::reservation_time::Model, DbErr> {
    let start_at = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| DbErr::Custom(format!("invalid test time {hour}:{minute}")))?;

    ReservationTimeFactory::new(db).start_at(start_at).build().await
}
