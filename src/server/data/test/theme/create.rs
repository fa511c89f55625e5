use super::*;

/// Tests creating a new theme.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_theme() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ThemeRepository::new(db);
    let created = repo
        .create(CreateThemeParams {
            name: "Haunted Mansion".to_string(),
            description: "Escape before midnight".to_string(),
            thumbnail: "https://example.com/mansion.png".to_string(),
        })
        .await?;

    let db_theme = entity::prelude::Theme::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_theme.name, "Haunted Mansion");
    assert_eq!(db_theme.description, "Escape before midnight");
    assert_eq!(db_theme.thumbnail, "https://example.com/mansion.png");

    Ok(())
}
