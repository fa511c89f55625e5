use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        reservation_time::{
            AvailableReservationTimeDto, CreateReservationTimeDto, ReservationTimeDto,
        },
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::reservation_time::CreateReservationTimeParams,
        service::reservation_time::ReservationTimeService,
        state::AppState,
        util::parse::parse_date,
    },
};

/// Tag for grouping time slot endpoints in OpenAPI documentation
pub static RESERVATION_TIME_TAG: &str = "reservation_time";

/// Query parameters for the available times endpoint.
///
/// Both are optional at the extractor level so that a missing value is reported as a
/// validation error with the usual error body.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimesParams {
    pub date: Option<String>,
    pub theme_id: Option<i32>,
}

/// Create a new time slot.
///
/// # Returns
/// - `201 Created` - Time slot created
/// - `400 Bad Request` - Start time malformed or already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/times",
    tag = RESERVATION_TIME_TAG,
    request_body = CreateReservationTimeDto,
    responses(
        (status = 201, description = "Successfully created time slot", body = ReservationTimeDto),
        (status = 400, description = "Invalid or duplicate start time", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_time(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationTimeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = ReservationTimeService::new(&state.db);

    let params = CreateReservationTimeParams::from_dto(payload)?;

    let time = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/times/{}", time.id))],
        Json(time.into_dto()),
    ))
}

/// Get all time slots ordered by start time.
#[utoipa::path(
    get,
    path = "/times",
    tag = RESERVATION_TIME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved time slots", body = Vec<ReservationTimeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_times(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReservationTimeService::new(&state.db);

    let times = service.get_all().await?;

    let dtos: Vec<ReservationTimeDto> = times.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get time slots with their booking status.
///
/// Lists every time slot and whether the theme is already booked for it on the date.
/// Used by the booking page to grey out taken slots.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Date (`YYYY-MM-DD`) and theme ID to check
///
/// # Returns
/// - `200 OK` - All slots with an `alreadyBooked` flag
/// - `400 Bad Request` - Date malformed or theme ID missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/times/available",
    tag = RESERVATION_TIME_TAG,
    params(
        ("date" = String, Query, description = "Date to check, formatted YYYY-MM-DD"),
        ("themeId" = i32, Query, description = "Theme ID to check")
    ),
    responses(
        (status = 200, description = "Successfully retrieved available times", body = Vec<AvailableReservationTimeDto>),
        (status = 400, description = "Invalid date or missing theme ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_times(
    State(state): State<AppState>,
    params: Result<Query<AvailableTimesParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let service = ReservationTimeService::new(&state.db);

    let date = parse_date(params.date.as_deref().unwrap_or_default())?;
    let theme_id = params.theme_id.ok_or(ValidationError::MissingThemeId)?;

    let times = service.get_available(date, theme_id).await?;

    let dtos: Vec<AvailableReservationTimeDto> =
        times.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Delete a time slot.
///
/// # Returns
/// - `204 No Content` - Slot deleted or absent
/// - `400 Bad Request` - Reservations still use the slot
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/times/{id}",
    tag = RESERVATION_TIME_TAG,
    params(
        ("id" = i32, Path, description = "Time slot ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted time slot"),
        (status = 400, description = "Time slot is in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_time(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let service = ReservationTimeService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
