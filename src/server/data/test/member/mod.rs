use crate::server::{data::member::MemberRepository, model::member::Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists_by_role;
mod find_by_email;
