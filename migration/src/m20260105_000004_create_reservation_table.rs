use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_reservation_time_table::ReservationTime,
    m20260105_000003_create_theme_table::Theme,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string(Reservation::Name))
                    .col(date(Reservation::Date))
                    .col(integer(Reservation::TimeId))
                    .col(integer(Reservation::ThemeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_time_id")
                            .from(Reservation::Table, Reservation::TimeId)
                            .to(ReservationTime::Table, ReservationTime::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_theme_id")
                            .from(Reservation::Table, Reservation::ThemeId)
                            .to(Theme::Table, Theme::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One booking per theme and time slot on a given day
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_date_time_theme")
                    .table(Reservation::Table)
                    .col(Reservation::Date)
                    .col(Reservation::TimeId)
                    .col(Reservation::ThemeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Name,
    Date,
    TimeId,
    ThemeId,
}
