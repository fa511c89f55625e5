use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique_key = "date_time_theme")]
    pub date: Date,
    #[sea_orm(unique_key = "date_time_theme")]
    pub time_id: i32,
    #[sea_orm(unique_key = "date_time_theme")]
    pub theme_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation_time::Entity",
        from = "Column::TimeId",
        to = "super::reservation_time::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ReservationTime,
    #[sea_orm(
        belongs_to = "super::theme::Entity",
        from = "Column::ThemeId",
        to = "super::theme::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Theme,
}

impl Related<super::reservation_time::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationTime.def()
    }
}

impl Related<super::theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Theme.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
