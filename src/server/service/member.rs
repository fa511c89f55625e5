use sea_orm::DatabaseConnection;

use crate::server::{
    config::AdminSeed,
    data::member::MemberRepository,
    error::{validation::ValidationError, AppError},
    model::member::{CreateMemberParams, Member, Role},
    util::password::hash_password,
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a member, hashing the password before it is stored.
    ///
    /// # Returns
    /// - `Ok(Member)` - Created member
    /// - `Err(AppError::ValidationErr(DuplicateEmail))` - Email already registered
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        if repo.exists_by_email(&params.email).await? {
            return Err(ValidationError::DuplicateEmail(params.email).into());
        }

        let password_hash = hash_password(params.password).await?;
        let email = params.email.clone();
        let member = repo
            .create(params.name, params.email, password_hash, params.role)
            .await
            .map_err(|e| {
                AppError::unique_violation_as(e, ValidationError::DuplicateEmail(email))
            })?;

        Ok(Member::from_entity(member)?)
    }

    /// Creates the configured administrator unless an admin already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Administrator created
    /// - `Ok(false)` - An admin already exists, or the email belongs to another member
    pub async fn create_admin_if_missing(&self, seed: AdminSeed) -> Result<bool, AppError> {
        let repo = MemberRepository::new(self.db);

        if repo.exists_by_role(Role::Admin).await? {
            return Ok(false);
        }

        if repo.exists_by_email(&seed.email).await? {
            tracing::warn!(
                "Cannot seed administrator: email {} already belongs to a member",
                seed.email
            );
            return Ok(false);
        }

        self.create(CreateMemberParams {
            name: seed.name,
            email: seed.email,
            password: seed.password,
            role: Role::Admin,
        })
        .await?;

        Ok(true)
    }
}
