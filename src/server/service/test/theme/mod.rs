use crate::server::{
    error::{validation::ValidationError, AppError},
    model::theme::CreateThemeParams,
    service::theme::ThemeService,
};
use chrono::{Duration, NaiveDate};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_popular;

fn params(name: &str) -> CreateThemeParams {
    CreateThemeParams {
        name: name.to_string(),
        description: "Escape before midnight".to_string(),
        thumbnail: "https://example.com/theme.png".to_string(),
    }
}
