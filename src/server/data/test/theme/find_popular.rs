use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 5, 10).unwrap()
}

/// Tests ranking themes by reservation count within the window.
///
/// Creates three themes with 1, 3 and 2 reservations inside the window.
///
/// Expected: Ok with themes ordered by count descending
#[tokio::test]
async fn ranks_themes_by_reservation_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let time = factory::create_reservation_time(db).await?;
    let low = factory::create_theme(db).await?;
    let high = factory::create_theme(db).await?;
    let mid = factory::create_theme(db).await?;

    for (theme_id, count) in [(low.id, 1), (high.id, 3), (mid.id, 2)] {
        for day in 1..=count {
            factory::reservation::ReservationFactory::new(db, time.id, theme_id)
                .date(today() - Duration::days(day))
                .build()
                .await?;
        }
    }

    let repo = ThemeRepository::new(db);
    let popular = repo
        .find_popular(today() - Duration::days(7), today() - Duration::days(1), 10)
        .await?;

    let ids: Vec<i32> = popular.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![high.id, mid.id, low.id]);

    Ok(())
}

/// Tests that reservations outside the window are ignored.
///
/// Reservations dated today and eight days ago fall outside `today-7..=today-1`.
///
/// Expected: Ok with only the theme booked inside the window
#[tokio::test]
async fn ignores_reservations_outside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let time = factory::create_reservation_time(db).await?;
    let inside = factory::create_theme(db).await?;
    let outside = factory::create_theme(db).await?;

    factory::reservation::ReservationFactory::new(db, time.id, inside.id)
        .date(today() - Duration::days(7))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, time.id, outside.id)
        .date(today())
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, time.id, outside.id)
        .date(today() - Duration::days(8))
        .build()
        .await?;

    let repo = ThemeRepository::new(db);
    let popular = repo
        .find_popular(today() - Duration::days(7), today() - Duration::days(1), 10)
        .await?;

    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].id, inside.id);

    Ok(())
}

/// Tests tie breaking and the result limit.
///
/// Twelve themes each get one reservation in the window.
///
/// Expected: Ok with the ten lowest theme IDs in ascending order
#[tokio::test]
async fn breaks_ties_by_id_and_limits_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let time = factory::create_reservation_time(db).await?;
    let mut theme_ids = Vec::new();
    for _ in 0..12 {
        let theme = factory::create_theme(db).await?;
        factory::reservation::ReservationFactory::new(db, time.id, theme.id)
            .date(today() - Duration::days(3))
            .build()
            .await?;
        theme_ids.push(theme.id);
    }

    let repo = ThemeRepository::new(db);
    let popular = repo
        .find_popular(today() - Duration::days(7), today() - Duration::days(1), 10)
        .await?;

    let ids: Vec<i32> = popular.iter().map(|t| t.id).collect();
    assert_eq!(ids, theme_ids[..10].to_vec());

    Ok(())
}
