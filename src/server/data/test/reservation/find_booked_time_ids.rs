use super::*;

/// Tests finding slots booked for a theme on a date.
///
/// Books two of three slots for the theme, plus one slot for another theme and
/// one on another date.
///
/// Expected: Ok with only the two matching slot IDs
#[tokio::test]
async fn returns_slots_booked_for_date_and_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let morning = factory::create_reservation_time_at(db, 10, 0).await?;
    let noon = factory::create_reservation_time_at(db, 12, 0).await?;
    let evening = factory::create_reservation_time_at(db, 18, 0).await?;
    let theme = factory::create_theme(db).await?;
    let other_theme = factory::create_theme(db).await?;
    let day = date(2030, 1, 15);

    for time_id in [morning.id, evening.id] {
        factory::reservation::ReservationFactory::new(db, time_id, theme.id)
            .date(day)
            .build()
            .await?;
    }
    factory::reservation::ReservationFactory::new(db, noon.id, other_theme.id)
        .date(day)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, noon.id, theme.id)
        .date(day + Duration::days(1))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let mut booked = repo.find_booked_time_ids(day, theme.id).await?;
    booked.sort();

    assert_eq!(booked, vec![morning.id, evening.id]);

    Ok(())
}
