//! Member domain models and parameters.

use std::str::FromStr;

use crate::{
    model::member::{CreateMemberDto, LoginDto, MemberDto},
    server::error::{internal::InternalError, validation::ValidationError},
};

/// Authorization role stored on each member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            other => Err(InternalError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Member {
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts a member row, dropping the password hash.
    ///
    /// # Returns
    /// - `Ok(Member)` - Converted member
    /// - `Err(InternalError::UnknownRole)` - Stored role is not `ADMIN` or `USER`
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role.parse()?,
        })
    }
}

/// Principal decoded from the login token of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginMember {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<Member> for LoginMember {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            role: member.role,
        }
    }
}

/// Parameters for registering a member.
///
/// The password is still plain text here; the service hashes it before it
/// reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl CreateMemberParams {
    /// Builds parameters for a regular `USER` signup.
    pub fn from_dto(dto: CreateMemberDto) -> Result<Self, ValidationError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::BlankField("Member name"));
        }

        let email = dto.email.trim().to_string();
        if email.is_empty() {
            return Err(ValidationError::BlankField("Email"));
        }

        if dto.password.trim().is_empty() {
            return Err(ValidationError::BlankField("Password"));
        }

        Ok(Self {
            name,
            email,
            password: dto.password,
            role: Role::User,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}
