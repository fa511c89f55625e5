use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::theme::CreateThemeParams;

pub struct ThemeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateThemeParams) -> Result<entity::theme::Model, DbErr> {
        entity::theme::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            thumbnail: ActiveValue::Set(params.thumbnail),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every theme ordered by ID
    pub async fn find_all(&self) -> Result<Vec<entity::theme::Model>, DbErr> {
        entity::prelude::Theme::find()
            .order_by_asc(entity::theme::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::theme::Model>, DbErr> {
        entity::prelude::Theme::find_by_id(id).one(self.db).await
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Theme::find()
            .filter(entity::theme::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the most reserved themes for reservations dated within `from..=to`.
    ///
    /// Themes are ranked by reservation count, highest first, with ties broken by
    /// ascending theme ID. Themes without reservations in the range are omitted.
    ///
    /// # Arguments
    /// - `from` - First reservation date counted (inclusive)
    /// - `to` - Last reservation date counted (inclusive)
    /// - `limit` - Maximum number of themes returned
    pub async fn find_popular(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        limit: usize,
    ) -> Result<Vec<entity::theme::Model>, DbErr> {
        let theme_ids: Vec<i32> = entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::ThemeId)
            .filter(entity::reservation::Column::Date.between(from, to))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, usize> = HashMap::new();
        for theme_id in theme_ids {
            *counts.entry(theme_id).or_default() += 1;
        }

        let mut ranked: Vec<(i32, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(limit);

        if ranked.is_empty() {
            return Ok(Vec::new());
        }

        let mut themes: HashMap<i32, entity::theme::Model> = entity::prelude::Theme::find()
            .filter(entity::theme::Column::Id.is_in(ranked.iter().map(|(id, _)| *id)))
            .all(self.db)
            .await?
            .into_iter()
            .map(|theme| (theme.id, theme))
            .collect();

        Ok(ranked
            .into_iter()
            .filter_map(|(id, _)| themes.remove(&id))
            .collect())
    }

    /// Deletes a theme, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Theme::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
