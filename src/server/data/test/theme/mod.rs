use crate::server::{data::theme::ThemeRepository, model::theme::CreateThemeParams};
use chrono::{Duration, NaiveDate};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_popular;
