//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns (theme names, member emails, slot start times)
/// distinct across factory calls.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reservation together with the time slot and theme it points at.
///
/// All entities are created with default values; the reservation is dated one week
/// from today.
///
/// # Returns
/// - `Ok((time, theme, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::reservation_time::Model,
        entity::theme::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let time = crate::factory::reservation_time::create_reservation_time(db).await?;
    let theme = crate::factory::theme::create_theme(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, time.id, theme.id).await?;

    Ok((time, theme, reservation))
}
