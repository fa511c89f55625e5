use super::*;

fn login(email: &str, password: &str) -> LoginParams {
    LoginParams {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests logging in with correct credentials.
///
/// Verifies that the issued token decodes back to the member.
///
/// Expected: Ok with a token carrying the member's ID, name and role
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::member::MemberFactory::new(db)
        .name("brown")
        .email("brown@example.com")
        .password(hash_password("secret".to_string()).await?)
        .build()
        .await?;

    let tokens = TokenManager::new("test-secret", 3600);
    let service = AuthService::new(db, &tokens);
    let token = service.login(login("brown@example.com", "secret")).await?;

    let login_member = tokens.verify_token(&token)?;
    assert_eq!(login_member.id, member.id);
    assert_eq!(login_member.name, "brown");
    assert_eq!(login_member.role, Role::User);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .email("brown@example.com")
        .password(hash_password("secret".to_string()).await?)
        .build()
        .await?;

    let tokens = TokenManager::new("test-secret", 3600);
    let service = AuthService::new(db, &tokens);
    let result = service.login(login("brown@example.com", "wrong")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an email nobody registered.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenManager::new("test-secret", 3600);
    let service = AuthService::new(db, &tokens);
    let result = service.login(login("nobody@example.com", "secret")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
