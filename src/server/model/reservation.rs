//! Reservation domain models and parameters.
//!
//! A reservation always travels together with its time slot and theme, so the domain
//! model embeds both rather than exposing raw foreign keys.

use chrono::NaiveDate;

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto},
    server::{
        error::validation::ValidationError,
        model::{reservation_time::ReservationTime, theme::Theme},
        util::parse::{format_date, parse_date},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    /// Name of the guest the reservation is made for.
    pub name: String,
    pub date: NaiveDate,
    pub time: ReservationTime,
    pub theme: Theme,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            name: self.name,
            date: format_date(self.date),
            time: self.time.into_dto(),
            theme: self.theme.into_dto(),
        }
    }

    /// Converts a reservation row and its joined time slot and theme.
    pub fn from_entity(
        entity: entity::reservation::Model,
        time: entity::reservation_time::Model,
        theme: entity::theme::Model,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            date: entity.date,
            time: ReservationTime::from_entity(time),
            theme: Theme::from_entity(theme),
        }
    }
}

/// Reservation row joined with the rows its foreign keys point at.
///
/// Produced by the repository; the joined models are guaranteed present by the
/// foreign key constraints.
#[derive(Debug, Clone)]
pub struct ReservationWithRelations {
    pub reservation: entity::reservation::Model,
    pub time: entity::reservation_time::Model,
    pub theme: entity::theme::Model,
}

impl ReservationWithRelations {
    pub fn into_domain(self) -> Reservation {
        Reservation::from_entity(self.reservation, self.time, self.theme)
    }
}

/// Parameters for creating a reservation.
///
/// The time and theme IDs stay optional here; the service checks presence and
/// existence together so that errors are reported in a stable order.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub name: String,
    pub date: NaiveDate,
    pub time_id: Option<i32>,
    pub theme_id: Option<i32>,
}

impl CreateReservationParams {
    /// Validates the guest name and parses the reservation date.
    ///
    /// # Returns
    /// - `Ok(CreateReservationParams)` - Request is well formed
    /// - `Err(ValidationError::BlankField)` - Guest name is empty or whitespace
    /// - `Err(ValidationError::MalformedDate)` - Date is not a valid `YYYY-MM-DD` day
    pub fn from_dto(dto: CreateReservationDto) -> Result<Self, ValidationError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::BlankField("Reservation name"));
        }

        Ok(Self {
            name,
            date: parse_date(&dto.date)?,
            time_id: dto.time_id,
            theme_id: dto.theme_id,
        })
    }
}
