//! Roomescape Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the roomescape
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus fixtures and factories for the reservation domain.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **fixture**: In-memory entity models with sensible defaults
//! - **factory**: Builders that insert entities into the test database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_theme_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_reservation_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let theme = factory::create_theme(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
