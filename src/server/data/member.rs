use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::member::Role;

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a member with an already hashed password
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: Role,
    ) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any member holds the given role
    pub async fn exists_by_role(&self, role: Role) -> Result<bool, DbErr> {
        let count = entity::prelude::Member::find()
            .filter(entity::member::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
