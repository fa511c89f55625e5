use crate::server::{
    error::{auth::AuthError, AppError},
    model::member::{LoginParams, Role},
    service::auth::AuthService,
    util::{jwt::TokenManager, password::hash_password},
};
use test_utils::{builder::TestBuilder, factory};

mod login;
