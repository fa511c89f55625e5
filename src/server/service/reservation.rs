use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        reservation::ReservationRepository, reservation_time::ReservationTimeRepository,
        theme::ThemeRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        reservation::{CreateReservationParams, Reservation},
        reservation_time::ReservationTime,
    },
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation after checking the time slot, theme, date and availability.
    ///
    /// Checks run in a fixed order so that the first failing rule is reported:
    /// time slot present and existing, theme present and existing, not in the past
    /// relative to `now`, and not already booked.
    ///
    /// # Arguments
    /// - `params` - Validated guest name and date with the requested slot and theme
    /// - `now` - Current local date and time
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Created reservation with its time slot and theme
    /// - `Err(AppError::ValidationErr)` - A reservation rule was violated
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        params: CreateReservationParams,
        now: NaiveDateTime,
    ) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);

        let time_id = params.time_id.ok_or(ValidationError::MissingTimeId)?;
        let time = ReservationTimeRepository::new(self.db)
            .find_by_id(time_id)
            .await?
            .map(ReservationTime::from_entity)
            .ok_or(ValidationError::TimeNotFound(time_id))?;

        let theme_id = params.theme_id.ok_or(ValidationError::MissingThemeId)?;
        if ThemeRepository::new(self.db)
            .find_by_id(theme_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::ThemeNotFound(theme_id).into());
        }

        if time.is_past_on(params.date, now) {
            return Err(ValidationError::PastReservation.into());
        }

        if repo
            .exists_by_date_and_time_and_theme(params.date, time.id, theme_id)
            .await?
        {
            return Err(ValidationError::DuplicateReservation.into());
        }

        let created = repo
            .create(params.name, params.date, time.id, theme_id)
            .await
            .map_err(|e| {
                AppError::unique_violation_as(e, ValidationError::DuplicateReservation)
            })?;

        tracing::info!(
            "Created reservation {} on {} at {} for theme {}",
            created.reservation.id,
            created.reservation.date,
            created.time.start_at,
            theme_id
        );

        Ok(created.into_domain())
    }

    /// Gets every reservation ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        let reservations = repo.find_all().await?;

        Ok(reservations.into_iter().map(|r| r.into_domain()).collect())
    }

    /// Deletes a reservation; a missing ID is not an error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ReservationRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            tracing::debug!("Reservation {} did not exist, nothing deleted", id);
        }

        Ok(())
    }
}
