use super::*;

/// Tests creating a new time slot.
///
/// Verifies that the repository inserts the slot and returns it with a generated ID
/// and the requested start time.
///
/// Expected: Ok with slot persisted
#[tokio::test]
async fn creates_time_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationTimeRepository::new(db);
    let start_at = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    let created = repo.create(CreateReservationTimeParams { start_at }).await?;

    assert_eq!(created.start_at, start_at);

    let db_time = entity::prelude::ReservationTime::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_time.is_some());

    Ok(())
}

/// Tests that the unique start time constraint backs up the service check.
///
/// Expected: Err when inserting the same start time twice
#[tokio::test]
async fn fails_for_duplicate_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationTimeRepository::new(db);
    let start_at = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    repo.create(CreateReservationTimeParams { start_at }).await?;

    let result = repo.create(CreateReservationTimeParams { start_at }).await;

    assert!(result.is_err());

    Ok(())
}
