//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let admin = MemberFactory::new(&db)
///     .email("admin@roomescape.test")
///     .role("ADMIN")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::member::Model,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values from fixture.
    ///
    /// Name and email carry a unique counter value so repeated calls never collide on
    /// the unique email column.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::member::entity_builder()
            .name(format!("Member {}", id))
            .email(format!("member{}@roomescape.test", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.entity.password = password.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.entity.role = role.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            email: ActiveValue::Set(self.entity.email),
            password: ActiveValue::Set(self.entity.password),
            role: ActiveValue::Set(self.entity.role),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
