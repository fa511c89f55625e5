//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types perform request-level validation when built from their DTOs.

pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;
