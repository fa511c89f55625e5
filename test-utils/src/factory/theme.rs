//! Theme factory for creating test theme entities.
//!
//! This module provides factory methods for creating theme entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test themes with customizable fields.
///
/// Default values are sourced from the theme fixture, with a unique name per call.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::theme::ThemeFactory;
///
/// let theme = ThemeFactory::new(&db)
///     .name("Haunted Mansion")
///     .build()
///     .await?;
/// ```
pub struct ThemeFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::theme::Model,
}

impl<'a> ThemeFactory<'a> {
    /// Creates a new ThemeFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ThemeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::theme::entity_builder()
            .name(format!("Theme {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the theme name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the theme description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    /// Sets the thumbnail URL.
    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.entity.thumbnail = thumbnail.into();
        self
    }

    /// Builds and inserts the theme entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::theme::Model)` - Created theme entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::theme::Model, DbErr> {
        entity::theme::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            thumbnail: ActiveValue::Set(self.entity.thumbnail),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a theme with default values.
///
/// Shorthand for `ThemeFactory::new(db).build().await`.
pub async fn create_theme(db: &DatabaseConnection) -> Result<entity::theme::Model, DbErr> {
    ThemeFactory::new(db).build().await
}
