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
        theme::{CreateThemeDto, ThemeDto},
    },
    server::{
        error::AppError, model::theme::CreateThemeParams, service::theme::ThemeService,
        state::AppState,
    },
};

/// Tag for grouping theme endpoints in OpenAPI documentation
pub static THEME_TAG: &str = "theme";

/// Create a new theme.
///
/// # Returns
/// - `201 Created` - Theme created
/// - `400 Bad Request` - Name blank or already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/themes",
    tag = THEME_TAG,
    request_body = CreateThemeDto,
    responses(
        (status = 201, description = "Successfully created theme", body = ThemeDto),
        (status = 400, description = "Invalid or duplicate theme", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_theme(
    State(state): State<AppState>,
    payload: Result<Json<CreateThemeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = ThemeService::new(&state.db);

    let params = CreateThemeParams::from_dto(payload)?;

    let theme = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/themes/{}", theme.id))],
        Json(theme.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/themes",
    tag = THEME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved themes", body = Vec<ThemeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_themes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ThemeService::new(&state.db);

    let themes = service.get_all().await?;

    let dtos: Vec<ThemeDto> = themes.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the most popular themes.
///
/// Ranks themes by the number of reservations dated within the 7 days before today
/// and returns at most 10, most reserved first.
///
/// # Returns
/// - `200 OK` - Ranked list of themes
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/themes/popular",
    tag = THEME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved popular themes", body = Vec<ThemeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_popular_themes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ThemeService::new(&state.db);

    let themes = service
        .get_popular(chrono::Local::now().date_naive())
        .await?;

    let dtos: Vec<ThemeDto> = themes.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Delete a theme.
///
/// # Returns
/// - `204 No Content` - Theme deleted or absent
/// - `400 Bad Request` - Reservations still use the theme
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/themes/{id}",
    tag = THEME_TAG,
    params(
        ("id" = i32, Path, description = "Theme ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted theme"),
        (status = 400, description = "Theme is in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_theme(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let service = ThemeService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
