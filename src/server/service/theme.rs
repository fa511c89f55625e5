use chrono::{Duration, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{reservation::ReservationRepository, theme::ThemeRepository},
    error::{validation::ValidationError, AppError},
    model::theme::{CreateThemeParams, Theme},
};

/// Number of days before today counted towards popularity
const POPULAR_WINDOW_DAYS: i64 = 7;
const POPULAR_LIMIT: usize = 10;

pub struct ThemeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a theme, rejecting a name that is already in use
    pub async fn create(&self, params: CreateThemeParams) -> Result<Theme, AppError> {
        let repo = ThemeRepository::new(self.db);

        if repo.exists_by_name(&params.name).await? {
            return Err(ValidationError::DuplicateThemeName(params.name).into());
        }

        let name = params.name.clone();
        let theme = repo.create(params).await.map_err(|e| {
            AppError::unique_violation_as(e, ValidationError::DuplicateThemeName(name))
        })?;

        Ok(Theme::from_entity(theme))
    }

    /// Gets every theme ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Theme>, AppError> {
        let repo = ThemeRepository::new(self.db);

        let themes = repo.find_all().await?;

        Ok(themes.into_iter().map(Theme::from_entity).collect())
    }

    /// Gets up to 10 themes with the most reservations over the week before `today`.
    ///
    /// Reservations dated today or later do not count.
    pub async fn get_popular(&self, today: NaiveDate) -> Result<Vec<Theme>, AppError> {
        let repo = ThemeRepository::new(self.db);

        let from = today - Duration::days(POPULAR_WINDOW_DAYS);
        let to = today - Duration::days(1);
        let themes = repo.find_popular(from, to, POPULAR_LIMIT).await?;

        Ok(themes.into_iter().map(Theme::from_entity).collect())
    }

    /// Deletes a theme unless reservations still use it.
    ///
    /// # Returns
    /// - `Ok(())` - Theme deleted or did not exist
    /// - `Err(AppError::ValidationErr(ThemeInUse))` - A reservation references the theme
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if ReservationRepository::new(self.db)
            .exists_by_theme_id(id)
            .await?
        {
            return Err(ValidationError::ThemeInUse.into());
        }

        ThemeRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
