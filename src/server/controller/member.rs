use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{CreateMemberDto, MemberDto},
    },
    server::{
        error::AppError, model::member::CreateMemberParams, service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Register a new member.
///
/// Creates a regular `USER` member who can then log in with the given email and
/// password.
///
/// # Returns
/// - `201 Created` - Member registered
/// - `400 Bad Request` - Blank field or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Successfully registered member", body = MemberDto),
        (status = 400, description = "Invalid or duplicate member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    payload: Result<Json<CreateMemberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = MemberService::new(&state.db);

    let params = CreateMemberParams::from_dto(payload)?;

    let member = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/members/{}", member.id))],
        Json(member.into_dto()),
    ))
}
