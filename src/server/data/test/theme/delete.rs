use super::*;

/// Tests deleting an unused theme.
///
/// Expected: Ok with one row removed
#[tokio::test]
async fn deletes_unused_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let theme = factory::create_theme(db).await?;

    let repo = ThemeRepository::new(db);
    let removed = repo.delete(theme.id).await?;

    assert_eq!(removed, 1);
    assert!(entity::prelude::Theme::find_by_id(theme.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that the foreign key prevents removing a theme in use.
///
/// Expected: Err because a reservation references the theme
#[tokio::test]
async fn fails_when_theme_is_referenced() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_time, theme, _reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ThemeRepository::new(db);
    let result = repo.delete(theme.id).await;

    assert!(result.is_err());

    Ok(())
}
