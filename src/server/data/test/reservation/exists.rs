use super::*;

/// Tests the duplicate booking lookup on date, time slot and theme.
///
/// Expected: true only when all three match
#[tokio::test]
async fn matches_on_date_time_and_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (time, theme, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_theme = factory::create_theme(db).await?;

    let repo = ReservationRepository::new(db);

    assert!(
        repo.exists_by_date_and_time_and_theme(reservation.date, time.id, theme.id)
            .await?
    );
    assert!(
        !repo
            .exists_by_date_and_time_and_theme(reservation.date, time.id, other_theme.id)
            .await?
    );
    assert!(
        !repo
            .exists_by_date_and_time_and_theme(
                reservation.date + Duration::days(1),
                time.id,
                theme.id
            )
            .await?
    );

    Ok(())
}

/// Tests the usage lookups guarding time slot and theme deletion.
///
/// Expected: true for the referenced slot and theme, false for unused ones
#[tokio::test]
async fn detects_slot_and_theme_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (time, theme, _reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let unused_time = factory::create_reservation_time(db).await?;
    let unused_theme = factory::create_theme(db).await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.exists_by_time_id(time.id).await?);
    assert!(!repo.exists_by_time_id(unused_time.id).await?);
    assert!(repo.exists_by_theme_id(theme.id).await?);
    assert!(!repo.exists_by_theme_id(unused_theme.id).await?);

    Ok(())
}
