use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    model::member::{LoginMember, LoginParams, Member},
    util::{jwt::TokenManager, password::verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenManager,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenManager) -> Self {
        Self { db, tokens }
    }

    /// Checks the credentials and issues a login token.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed login token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::InternalErr)` - Stored hash unreadable or token signing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, params: LoginParams) -> Result<String, AppError> {
        let repo = MemberRepository::new(self.db);

        let Some(member) = repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(params.password, member.password.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let member = LoginMember::from(Member::from_entity(member)?);
        tracing::info!("Member {} logged in", member.id);

        self.tokens.create_token(&member)
    }
}
