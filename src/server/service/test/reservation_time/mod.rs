use crate::server::{
    error::{validation::ValidationError, AppError},
    model::reservation_time::CreateReservationTimeParams,
    service::reservation_time::ReservationTimeService,
};
use chrono::{Duration, NaiveTime};
use test_utils::{builder::TestBuilder, factory};

mod get_available;
