use super::*;

/// Tests deleting an unused theme.
///
/// Expected: Ok and the theme is gone
#[tokio::test]
async fn deletes_unused_theme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ThemeService::new(db);
    let theme = service.create(params("Haunted Mansion")).await?;

    service.delete(theme.id).await?;

    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests that a theme used by a reservation cannot be deleted.
///
/// Expected: Err(ValidationError::ThemeInUse)
#[tokio::test]
async fn fails_when_theme_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_time, theme, _reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ThemeService::new(db);
    let result = service.delete(theme.id).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::ThemeInUse))
    ));

    Ok(())
}
