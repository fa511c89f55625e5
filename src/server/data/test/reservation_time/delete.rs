use super::*;

/// Tests deleting an unused time slot.
///
/// Expected: Ok with one row removed
#[tokio::test]
async fn deletes_unused_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let time = factory::create_reservation_time(db).await?;

    let repo = ReservationTimeRepository::new(db);
    let removed = repo.delete(time.id).await?;

    assert_eq!(removed, 1);
    let db_time = entity::prelude::ReservationTime::find_by_id(time.id)
        .one(db)
        .await?;
    assert!(db_time.is_none());

    Ok(())
}

/// Tests deleting a slot that does not exist.
///
/// Expected: Ok with zero rows removed
#[tokio::test]
async fn deleting_missing_slot_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationTimeRepository::new(db);
    let removed = repo.delete(999).await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests that the foreign key prevents removing a slot in use.
///
/// Expected: Err because a reservation references the slot
#[tokio::test]
async fn fails_when_slot_is_referenced() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (time, _theme, _reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationTimeRepository::new(db);
    let result = repo.delete(time.id).await;

    assert!(result.is_err());

    Ok(())
}
