//! Reading and writing the login cookie.

use axum::http::{header, HeaderMap};

/// Name of the cookie carrying the login token.
pub const TOKEN_COOKIE: &str = "token";

/// Finds a cookie value by name across all `Cookie` headers.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Builds the `Set-Cookie` value that stores the login token.
pub fn token_cookie(token: &str, max_age_seconds: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        TOKEN_COOKIE, token, max_age_seconds
    )
}

/// Builds the `Set-Cookie` value that clears the login token.
pub fn expired_token_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", TOKEN_COOKIE)
}
