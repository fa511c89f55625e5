use super::*;

/// Tests registering a member.
///
/// Verifies that the stored password is an argon2 hash of the submitted password.
///
/// Expected: Ok with a USER member and hashed password
#[tokio::test]
async fn creates_member_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MemberService::new(db);
    let member = service
        .create(CreateMemberParams {
            name: "brown".to_string(),
            email: "brown@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::User,
        })
        .await?;

    assert_eq!(member.role, Role::User);

    let stored = entity::member::Entity::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password, "secret");
    assert!(verify_password("secret".to_string(), stored.password).await?);

    Ok(())
}

/// Tests that an email can only be registered once.
///
/// Expected: Err(ValidationError::DuplicateEmail)
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_member(db).await?;

    let service = MemberService::new(db);
    let result = service
        .create(CreateMemberParams {
            name: "brown".to_string(),
            email: existing.email,
            password: "secret".to_string(),
            role: Role::User,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::DuplicateEmail(_)))
    ));

    Ok(())
}
