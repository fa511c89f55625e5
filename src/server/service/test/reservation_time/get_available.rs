use super::*;

/// Tests flagging booked slots for a date and theme.
///
/// Books the 12:00 slot for the theme on the day, and the 10:00 slot for another theme.
///
/// Expected: Ok with every slot listed and only 12:00 flagged as booked
#[tokio::test]
async fn flags_booked_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let morning = factory::create_reservation_time_at(db, 10, 0).await?;
    let noon = factory::create_reservation_time_at(db, 12, 0).await?;
    let theme = factory::create_theme(db).await?;
    let other_theme = factory::create_theme(db).await?;
    let reservation =
        factory::reservation::ReservationFactory::new(db, noon.id, theme.id)
            .build()
            .await?;
    factory::reservation::ReservationFactory::new(db, morning.id, other_theme.id)
        .date(reservation.date)
        .build()
        .await?;

    let service = ReservationTimeService::new(db);
    let available = service.get_available(reservation.date, theme.id).await?;

    let flags: Vec<(i32, bool)> = available
        .iter()
        .map(|a| (a.time.id, a.already_booked))
        .collect();
    assert_eq!(flags, vec![(morning.id, false), (noon.id, true)]);

    let next_day = service
        .get_available(reservation.date + Duration::days(1), theme.id)
        .await?;
    assert!(next_day.iter().all(|a| !a.already_booked));

    Ok(())
}
