use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::server::{
    data::{reservation::ReservationRepository, reservation_time::ReservationTimeRepository},
    error::{validation::ValidationError, AppError},
    model::reservation_time::{
        AvailableReservationTime, CreateReservationTimeParams, ReservationTime,
    },
    util::parse::format_time,
};

pub struct ReservationTimeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationTimeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a time slot, rejecting a start time that already exists
    pub async fn create(
        &self,
        params: CreateReservationTimeParams,
    ) -> Result<ReservationTime, AppError> {
        let repo = ReservationTimeRepository::new(self.db);

        if repo.exists_by_start_at(params.start_at).await? {
            return Err(ValidationError::DuplicateTime(format_time(params.start_at)).into());
        }

        let start_at = params.start_at;
        let time = repo.create(params).await.map_err(|e| {
            AppError::unique_violation_as(e, ValidationError::DuplicateTime(format_time(start_at)))
        })?;

        Ok(ReservationTime::from_entity(time))
    }

    /// Gets every time slot ordered by start time
    pub async fn get_all(&self) -> Result<Vec<ReservationTime>, AppError> {
        let repo = ReservationTimeRepository::new(self.db);

        let times = repo.find_all().await?;

        Ok(times.into_iter().map(ReservationTime::from_entity).collect())
    }

    /// Gets every time slot flagged with whether the theme is booked for it on `date`.
    ///
    /// # Arguments
    /// - `date` - Day to check bookings for
    /// - `theme_id` - Theme to check bookings for
    ///
    /// # Returns
    /// - `Ok(Vec<AvailableReservationTime>)` - All slots ordered by start time
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_available(
        &self,
        date: NaiveDate,
        theme_id: i32,
    ) -> Result<Vec<AvailableReservationTime>, AppError> {
        let times = ReservationTimeRepository::new(self.db).find_all().await?;
        let booked: HashSet<i32> = ReservationRepository::new(self.db)
            .find_booked_time_ids(date, theme_id)
            .await?
            .into_iter()
            .collect();

        Ok(times
            .into_iter()
            .map(|time| AvailableReservationTime {
                already_booked: booked.contains(&time.id),
                time: ReservationTime::from_entity(time),
            })
            .collect())
    }

    /// Deletes a time slot unless reservations still use it.
    ///
    /// # Returns
    /// - `Ok(())` - Slot deleted or did not exist
    /// - `Err(AppError::ValidationErr(TimeInUse))` - A reservation references the slot
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if ReservationRepository::new(self.db)
            .exists_by_time_id(id)
            .await?
        {
            return Err(ValidationError::TimeInUse.into());
        }

        ReservationTimeRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
