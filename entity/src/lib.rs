//! SeaORM entity models for the room-escape schema.

pub mod prelude;

pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;
