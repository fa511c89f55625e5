use super::*;

/// Tests that popularity is computed over the week before the given day.
///
/// One theme is booked twice last week, another three times today and in the future.
///
/// Expected: Ok with only the theme booked last week
#[tokio::test]
async fn counts_only_previous_week() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = NaiveDate::from_ymd_opt(2030, 5, 10).unwrap();
    let time = factory::create_reservation_time(db).await?;
    let last_week = factory::create_theme(db).await?;
    let upcoming = factory::create_theme(db).await?;

    for days_ago in [1, 7] {
        factory::reservation::ReservationFactory::new(db, time.id, last_week.id)
            .date(today - Duration::days(days_ago))
            .build()
            .await?;
    }
    for days_ahead in [0, 1, 2] {
        factory::reservation::ReservationFactory::new(db, time.id, upcoming.id)
            .date(today + Duration::days(days_ahead))
            .build()
            .await?;
    }

    let service = ThemeService::new(db);
    let popular = service.get_popular(today).await?;

    let ids: Vec<i32> = popular.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![last_week.id]);

    Ok(())
}

/// Tests popular themes with no reservations at all.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_theme(db).await?;

    let service = ThemeService::new(db);
    let popular = service
        .get_popular(NaiveDate::from_ymd_opt(2030, 5, 10).unwrap())
        .await?;

    assert!(popular.is_empty());

    Ok(())
}
