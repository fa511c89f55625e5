use super::*;

/// Tests the role lookup used for administrator seeding.
///
/// Expected: false with only regular members, true once an admin exists
#[tokio::test]
async fn detects_admin_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    assert!(!repo.exists_by_role(Role::Admin).await?);

    factory::member::MemberFactory::new(db)
        .role("ADMIN")
        .build()
        .await?;
    assert!(repo.exists_by_role(Role::Admin).await?);

    Ok(())
}
