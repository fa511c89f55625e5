use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        reservation::{CreateReservationDto, ReservationDto},
    },
    server::{
        error::AppError, model::reservation::CreateReservationParams,
        service::reservation::ReservationService, state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Create a new reservation.
///
/// Books a theme for a date and time slot on behalf of the named guest. The slot and
/// theme must exist, the date and slot must not lie in the past, and the theme must
/// not already be booked for that date and slot.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guest name, date, time slot ID and theme ID
///
/// # Returns
/// - `201 Created` - Reservation created, `Location` points at the new resource
/// - `400 Bad Request` - Invalid input or a reservation rule was violated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully created reservation", body = ReservationDto),
        (status = 400, description = "Invalid reservation request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = ReservationService::new(&state.db);

    let params = CreateReservationParams::from_dto(payload)?;

    let reservation = service
        .create(params, chrono::Local::now().naive_local())
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/reservations/{}", reservation.id))],
        Json(reservation.into_dto()),
    ))
}

/// Get all reservations.
///
/// Returns every reservation ordered by ID, each with its time slot and theme.
///
/// # Returns
/// - `200 OK` - List of reservations
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved reservations", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);

    let reservations = service.get_all().await?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Delete a reservation.
///
/// Deleting a reservation that does not exist also succeeds.
///
/// # Returns
/// - `204 No Content` - Reservation deleted or absent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted reservation"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let service = ReservationService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
