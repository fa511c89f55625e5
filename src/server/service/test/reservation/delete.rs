use super::*;

/// Tests deleting an existing reservation.
///
/// Expected: Ok and the reservation is no longer listed
#[tokio::test]
async fn deletes_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_time, _theme, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db);
    service.delete(reservation.id).await?;

    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests deleting a reservation that does not exist.
///
/// Expected: Ok without error
#[tokio::test]
async fn deleting_missing_reservation_is_ok() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ReservationService::new(db);
    let result = service.delete(999).await;

    assert!(result.is_ok());

    Ok(())
}
