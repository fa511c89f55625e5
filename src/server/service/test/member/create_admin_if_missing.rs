use super::*;

fn seed() -> AdminSeed {
    AdminSeed {
        name: "admin".to_string(),
        email: "admin@roomescape.test".to_string(),
        password: "admin-password".to_string(),
    }
}

/// Tests seeding the administrator on an empty database.
///
/// Expected: Ok(true) on the first call, Ok(false) once an admin exists
#[tokio::test]
async fn creates_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);

    assert!(service.create_admin_if_missing(seed()).await?);
    assert!(!service.create_admin_if_missing(seed()).await?);

    Ok(())
}

/// Tests that seeding is skipped when another admin already exists.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .role("ADMIN")
        .build()
        .await?;

    let service = MemberService::new(db);

    assert!(!service.create_admin_if_missing(seed()).await?);

    Ok(())
}
