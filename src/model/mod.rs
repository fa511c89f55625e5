//! Data transfer objects shared by the HTTP API.
//!
//! Every type here is serialized with camelCase field names and registered with the
//! OpenAPI document.

pub mod api;
pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;
