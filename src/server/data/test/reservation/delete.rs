use super::*;

/// Tests deleting a reservation.
///
/// Verifies that only the reservation is removed and its slot and theme remain.
///
/// Expected: Ok with one row removed
#[tokio::test]
async fn deletes_reservation_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (time, theme, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let removed = repo.delete(reservation.id).await?;

    assert_eq!(removed, 1);
    assert!(entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::ReservationTime::find_by_id(time.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Theme::find_by_id(theme.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
