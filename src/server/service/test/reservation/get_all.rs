use super::*;

/// Tests listing reservations as domain models.
///
/// Expected: Ok with reservations in ID order and relations embedded
#[tokio::test]
async fn returns_all_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (time, theme, first) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let second = factory::reservation::ReservationFactory::new(db, time.id, theme.id)
        .date(first.date + Duration::days(1))
        .build()
        .await?;

    let service = ReservationService::new(db);
    let reservations = service.get_all().await?;

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(reservations
        .iter()
        .all(|r| r.time.id == time.id && r.theme.name == theme.name));

    Ok(())
}
