use super::*;

/// Tests creating a member.
///
/// Expected: Ok with role stored as its string form
#[tokio::test]
async fn creates_member_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(
            "brown".to_string(),
            "brown@example.com".to_string(),
            "hash".to_string(),
            Role::Admin,
        )
        .await?;

    assert_eq!(member.email, "brown@example.com");
    assert_eq!(member.password, "hash");
    assert_eq!(member.role, "ADMIN");

    Ok(())
}

/// Tests that the unique email constraint backs up the service check.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let result = repo
        .create(
            "other".to_string(),
            existing.email.clone(),
            "hash".to_string(),
            Role::User,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
