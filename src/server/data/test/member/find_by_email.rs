use super::*;

/// Tests finding a member by email.
///
/// Expected: Some for a registered email, None otherwise
#[tokio::test]
async fn finds_registered_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .email("brown@example.com")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert_eq!(repo.find_by_email("brown@example.com").await?, Some(member));
    assert_eq!(repo.find_by_email("nobody@example.com").await?, None);
    assert!(repo.exists_by_email("brown@example.com").await?);
    assert!(!repo.exists_by_email("nobody@example.com").await?);

    Ok(())
}
