//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let time = factory::create_reservation_time(&db).await?;
//!     let theme = factory::create_theme(&db).await?;
//!
//!     // Create with all dependencies
//!     let (time, theme, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let theme = factory::theme::ThemeFactory::new(&db)
//!     .name("Haunted Mansion")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod member;
pub mod reservation;
pub mod reservation_time;
pub mod theme;

pub use member::create_member;
pub use reservation::create_reservation;
pub use reservation_time::{create_reservation_time, create_reservation_time_at};
pub use theme::create_theme;
