use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `token` cookie was sent with the request.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The `token` cookie could not be verified.
    ///
    /// Covers bad signatures, expired tokens and malformed tokens.
    #[error("Invalid or expired login token")]
    InvalidToken,

    /// Unknown email or wrong password on login.
    ///
    /// Both cases share one message so that login does not reveal which emails
    /// are registered.
    #[error("Email or password does not match")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized with the error's display message. Errors are
/// logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication rejected: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
