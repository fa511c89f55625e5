use crate::server::{
    config::AdminSeed,
    error::{validation::ValidationError, AppError},
    model::member::{CreateMemberParams, Role},
    service::member::MemberService,
    util::password::verify_password,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_admin_if_missing;
