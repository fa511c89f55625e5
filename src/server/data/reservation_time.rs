use chrono::NaiveTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation_time::CreateReservationTimeParams;

pub struct ReservationTimeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationTimeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateReservationTimeParams,
    ) -> Result<entity::reservation_time::Model, DbErr> {
        entity::reservation_time::ActiveModel {
            start_at: ActiveValue::Set(params.start_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every time slot ordered by start time
    pub async fn find_all(&self) -> Result<Vec<entity::reservation_time::Model>, DbErr> {
        entity::prelude::ReservationTime::find()
            .order_by_asc(entity::reservation_time::Column::StartAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::reservation_time::Model>, DbErr> {
        entity::prelude::ReservationTime::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn exists_by_start_at(&self, start_at: NaiveTime) -> Result<bool, DbErr> {
        let count = entity::prelude::ReservationTime::find()
            .filter(entity::reservation_time::Column::StartAt.eq(start_at))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a time slot, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ReservationTime::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
