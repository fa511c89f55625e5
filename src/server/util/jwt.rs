//! Login token creation and verification.

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::member::{LoginMember, Role},
    util::parse::parse_i32_from_string,
};

/// Claims carried by a login token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Member ID as a decimal string
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signs and verifies HS256 login tokens with a shared secret.
#[derive(Clone)]
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expire_seconds: i64,
}

impl TokenManager {
    pub fn new(secret: &str, expire_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expire_seconds,
        }
    }

    /// Lifetime of issued tokens, also used as the cookie `Max-Age`.
    pub fn expire_seconds(&self) -> i64 {
        self.expire_seconds
    }

    pub fn create_token(&self, member: &LoginMember) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: member.id.to_string(),
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.as_str().to_string(),
            exp: now + self.expire_seconds,
            iat: now,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(InternalError::TokenEncoding)?;

        Ok(token)
    }

    /// Verifies signature and expiry, then rebuilds the logged-in member from the claims.
    ///
    /// # Returns
    /// - `Ok(LoginMember)` - Token is valid
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token is malformed, tampered with or expired
    /// - `Err(AppError::InternalErr)` - Key problems or claims that a token signed by this
    ///   server should never contain
    pub fn verify_token(&self, token: &str) -> Result<LoginMember, AppError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| -> AppError {
                let rejected_token = matches!(
                    e.kind(),
                    ErrorKind::InvalidToken
                        | ErrorKind::InvalidSignature
                        | ErrorKind::ExpiredSignature
                        | ErrorKind::MissingRequiredClaim(_)
                        | ErrorKind::ImmatureSignature
                        | ErrorKind::Base64(_)
                        | ErrorKind::Json(_)
                        | ErrorKind::Utf8(_)
                        | ErrorKind::InvalidAlgorithm
                );

                if rejected_token {
                    AuthError::InvalidToken.into()
                } else {
                    InternalError::TokenDecoding(e).into()
                }
            })?;

        let claims = data.claims;

        Ok(LoginMember {
            id: parse_i32_from_string(claims.sub)?,
            name: claims.name,
            email: claims.email,
            role: claims.role.parse::<Role>()?,
        })
    }
}
