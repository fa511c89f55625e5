use crate::server::{
    data::reservation_time::ReservationTimeRepository,
    model::reservation_time::CreateReservationTimeParams,
};
use chrono::NaiveTime;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
