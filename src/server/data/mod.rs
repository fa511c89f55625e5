//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! them (or joined bundles of them) to the service layer, which converts them into domain
//! models. All database queries, inserts and deletes are performed through these
//! repositories.

pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;

#[cfg(test)]
mod test;
