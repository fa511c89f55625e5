use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected input or violated reservation rules.
///
/// Every variant is surfaced to the client as 400 Bad Request with the display
/// message as the error body.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Body, path or query string could not be deserialized into the expected shape.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A required name field is empty or whitespace.
    #[error("{0} must not be blank")]
    BlankField(&'static str),

    /// Date is not a real calendar day in `YYYY-MM-DD` form.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),

    /// Time is not a valid `HH:MM` time of day.
    #[error("Invalid time '{0}', expected HH:MM")]
    MalformedTime(String),

    #[error("Time id must not be null")]
    MissingTimeId,

    #[error("Theme id must not be null")]
    MissingThemeId,

    #[error("Reservation time {0} does not exist")]
    TimeNotFound(i32),

    #[error("Theme {0} does not exist")]
    ThemeNotFound(i32),

    /// Reservation date and start time lie before the current moment.
    #[error("Cannot make a reservation in the past")]
    PastReservation,

    /// The theme is already booked for this date and time slot.
    #[error("A reservation already exists for this date, time and theme")]
    DuplicateReservation,

    #[error("Reservation time {0} already exists")]
    DuplicateTime(String),

    #[error("Theme name '{0}' is already in use")]
    DuplicateThemeName(String),

    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),

    /// Deleting a time slot that reservations still point at.
    #[error("Reservations exist for this time")]
    TimeInUse,

    /// Deleting a theme that reservations still point at.
    #[error("Reservations exist for this theme")]
    ThemeInUse,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Request rejected: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
