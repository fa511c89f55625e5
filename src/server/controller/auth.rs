use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{LoginCheckDto, LoginDto},
    },
    server::{
        error::AppError,
        model::member::{LoginMember, LoginParams},
        service::auth::AuthService,
        state::AppState,
        util::cookie::{expired_token_cookie, token_cookie},
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// On success the login token is stored in the `token` cookie (HttpOnly, path `/`),
/// which later requests send back automatically.
///
/// # Returns
/// - `200 OK` - Logged in, `Set-Cookie` carries the token
/// - `401 Unauthorized` - Email or password does not match
/// - `500 Internal Server Error` - Database or token error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in"),
        (status = 401, description = "Email or password does not match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = AuthService::new(&state.db, &state.tokens);

    let token = service.login(LoginParams::from_dto(payload)).await?;

    Ok((
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            token_cookie(&token, state.tokens.expire_seconds()),
        )],
    ))
}

/// Get the name of the logged-in member.
///
/// # Returns
/// - `200 OK` - Name of the member the `token` cookie belongs to
/// - `401 Unauthorized` - Cookie missing, expired or invalid
#[utoipa::path(
    get,
    path = "/login/check",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Member is logged in", body = LoginCheckDto),
        (status = 401, description = "Not logged in or invalid token", body = ErrorDto)
    ),
)]
pub async fn login_check(member: LoginMember) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(LoginCheckDto { name: member.name })))
}

/// Log out by clearing the `token` cookie.
#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out")
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (StatusCode::OK, [(header::SET_COOKIE, expired_token_cookie())])
}
