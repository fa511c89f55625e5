//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use
//! in unit tests and as default values for factories. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let theme = fixture::theme::entity();
//!
//! // Create with custom fields
//! let theme = fixture::theme::entity_builder()
//!     .name("Haunted Mansion")
//!     .build();
//! ```

pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;

pub use member::{entity as member_entity, entity_builder as member_entity_builder};
pub use reservation::{entity as reservation_entity, entity_builder as reservation_entity_builder};
pub use reservation_time::{
    entity as reservation_time_entity, entity_builder as reservation_time_entity_builder,
};
pub use theme::{entity as theme_entity, entity_builder as theme_entity_builder};
