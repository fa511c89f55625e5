//! Extraction of the logged-in member from the `token` cookie.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::member::LoginMember,
    state::AppState,
    util::cookie::{extract_cookie, TOKEN_COOKIE},
};

/// Resolves the logged-in member for handlers that take a `LoginMember` argument.
///
/// The token is verified on every request; nothing is looked up in the database.
///
/// # Returns
/// - `Ok(LoginMember)` - Valid token cookie present
/// - `Err(AppError::AuthErr(NotLoggedIn))` - No `token` cookie sent
/// - `Err(AppError::AuthErr(InvalidToken))` - Token failed verification
impl FromRequestParts<AppState> for LoginMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_cookie(&parts.headers, TOKEN_COOKIE) else {
            return Err(AuthError::NotLoggedIn.into());
        };

        state.tokens.verify_token(&token)
    }
}
