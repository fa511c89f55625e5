use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::reservation::ReservationWithRelations;

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a reservation and returns it joined with its time slot and theme.
    ///
    /// The caller is expected to have verified that both referenced rows exist.
    pub async fn create(
        &self,
        name: String,
        date: NaiveDate,
        time_id: i32,
        theme_id: i32,
    ) -> Result<ReservationWithRelations, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            name: ActiveValue::Set(name),
            date: ActiveValue::Set(date),
            time_id: ActiveValue::Set(time_id),
            theme_id: ActiveValue::Set(theme_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(reservation.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation with id {} not found after creation",
                reservation.id
            )))
    }

    /// Gets every reservation ordered by ID with its time slot and theme
    pub async fn find_all(&self) -> Result<Vec<ReservationWithRelations>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.attach_relations(reservations).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ReservationWithRelations>, DbErr> {
        let Some(reservation) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.attach_relations(vec![reservation]).await?.pop())
    }

    /// Checks whether the theme is already booked for the date and time slot
    pub async fn exists_by_date_and_time_and_theme(
        &self,
        date: NaiveDate,
        time_id: i32,
        theme_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Date.eq(date))
            .filter(entity::reservation::Column::TimeId.eq(time_id))
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_time_id(&self, time_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TimeId.eq(time_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_theme_id(&self, theme_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the IDs of time slots booked for a theme on a date
    pub async fn find_booked_time_ids(
        &self,
        date: NaiveDate,
        theme_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::TimeId)
            .filter(entity::reservation::Column::Date.eq(date))
            .filter(entity::reservation::Column::ThemeId.eq(theme_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Deletes a reservation, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Loads the time slots and themes referenced by the reservations, preserving order.
    async fn attach_relations(
        &self,
        reservations: Vec<entity::reservation::Model>,
    ) -> Result<Vec<ReservationWithRelations>, DbErr> {
        if reservations.is_empty() {
            return Ok(Vec::new());
        }

        let times: HashMap<i32, entity::reservation_time::Model> =
            entity::prelude::ReservationTime::find()
                .filter(
                    entity::reservation_time::Column::Id
                        .is_in(reservations.iter().map(|r| r.time_id)),
                )
                .all(self.db)
                .await?
                .into_iter()
                .map(|time| (time.id, time))
                .collect();

        let themes: HashMap<i32, entity::theme::Model> = entity::prelude::Theme::find()
            .filter(entity::theme::Column::Id.is_in(reservations.iter().map(|r| r.theme_id)))
            .all(self.db)
            .await?
            .into_iter()
            .map(|theme| (theme.id, theme))
            .collect();

        reservations
            .into_iter()
            .map(|reservation| {
                let time = times.get(&reservation.time_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Reservation time {} referenced by reservation {} not found",
                        reservation.time_id, reservation.id
                    ))
                })?;
                let theme = themes.get(&reservation.theme_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Theme {} referenced by reservation {} not found",
                        reservation.theme_id, reservation.id
                    ))
                })?;

                Ok(ReservationWithRelations {
                    reservation,
                    time,
                    theme,
                })
            })
            .collect()
    }
}
