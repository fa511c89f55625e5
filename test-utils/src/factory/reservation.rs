//! Reservation factory for creating test reservation entities.

use crate::fixture;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Inserts directly, bypassing service validation, so past-dated reservations can be
/// created to seed history.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, time.id, theme.id)
///     .date(yesterday)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::reservation::Model,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory for the given slot and theme.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `time_id` - ID of an existing time slot
    /// - `theme_id` - ID of an existing theme
    pub fn new(db: &'a DatabaseConnection, time_id: i32, theme_id: i32) -> Self {
        let entity = fixture::reservation::entity_builder()
            .time_id(time_id)
            .theme_id(theme_id)
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.entity.date = date;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            date: ActiveValue::Set(self.entity.date),
            time_id: ActiveValue::Set(self.entity.time_id),
            theme_id: ActiveValue::Set(self.entity.theme_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation one week from today for the given slot and theme.
pub async fn create_reservation(
    db: &DatabaseConnection,
    time_id: i32,
    theme_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, time_id, theme_id).build().await
}
