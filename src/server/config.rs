use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRE_SECONDS: i64 = 3600;
const DEFAULT_ADMIN_NAME: &str = "admin";

/// Credentials for the administrator seeded on first start.
#[derive(Clone)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret_key: String,
    pub jwt_expire_seconds: i64,

    /// Present only when both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set.
    pub admin: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin = match (optional_var("ADMIN_EMAIL"), optional_var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                name: optional_var("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret_key: required_var("JWT_SECRET_KEY")?,
            jwt_expire_seconds: match optional_var("JWT_EXPIRE_SECONDS") {
                Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "JWT_EXPIRE_SECONDS".to_string(),
                    value,
                })?,
                None => DEFAULT_JWT_EXPIRE_SECONDS,
            },
            admin,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
