//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into params, call the matching
//! service and convert the result back into DTOs. Every handler is annotated for the
//! OpenAPI document served at `/api/docs`.

pub mod auth;
pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;

#[cfg(test)]
mod test;
