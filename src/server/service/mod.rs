//! Business logic layer.
//!
//! Services enforce the reservation rules (existence, duplicate and past checks) on top
//! of the repositories and convert entity models into domain models. Each service
//! borrows the database connection for the duration of a request.

pub mod auth;
pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;

#[cfg(test)]
mod test;
