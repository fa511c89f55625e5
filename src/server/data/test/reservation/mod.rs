use crate::server::data::reservation::ReservationRepository;
use chrono::{Duration, NaiveDate};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod exists;
mod find_booked_time_ids;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
