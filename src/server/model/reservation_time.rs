//! Reservation time slot domain models and parameters.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    model::reservation_time::{
        AvailableReservationTimeDto, CreateReservationTimeDto, ReservationTimeDto,
    },
    server::{
        error::validation::ValidationError,
        util::parse::{format_time, parse_time},
    },
};

/// A bookable start time shared by every theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationTime {
    pub id: i32,
    pub start_at: NaiveTime,
}

impl ReservationTime {
    pub fn into_dto(self) -> ReservationTimeDto {
        ReservationTimeDto {
            id: self.id,
            start_at: format_time(self.start_at),
        }
    }

    pub fn from_entity(entity: entity::reservation_time::Model) -> Self {
        Self {
            id: entity.id,
            start_at: entity.start_at,
        }
    }

    /// Whether this slot on `date` has already started at `now`.
    ///
    /// A slot starting exactly at `now` is still bookable.
    pub fn is_past_on(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        date.and_time(self.start_at) < now
    }
}

#[derive(Debug, Clone)]
pub struct CreateReservationTimeParams {
    pub start_at: NaiveTime,
}

impl CreateReservationTimeParams {
    /// Parses the `HH:MM` start time of the request.
    ///
    /// # Returns
    /// - `Ok(CreateReservationTimeParams)` - Start time parsed
    /// - `Err(ValidationError::MalformedTime)` - Start time missing or malformed
    pub fn from_dto(dto: CreateReservationTimeDto) -> Result<Self, ValidationError> {
        Ok(Self {
            start_at: parse_time(&dto.start_at)?,
        })
    }
}

/// Time slot with its booking status for a specific date and theme.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableReservationTime {
    pub time: ReservationTime,
    pub already_booked: bool,
}

impl AvailableReservationTime {
    pub fn into_dto(self) -> AvailableReservationTimeDto {
        AvailableReservationTimeDto {
            id: self.time.id,
            start_at: format_time(self.time.start_at),
            already_booked: self.already_booked,
        }
    }
}
