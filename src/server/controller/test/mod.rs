use axum::http::{header, StatusCode};
use axum_test::TestServer;
use chrono::{Duration, Local, NaiveDate};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{router::router, state::AppState, util::jwt::TokenManager};


/// Builds the full router over a fresh in-memory database.
///
/// The returned context must stay alive for the duration of the test.
async fn test_server() -> (TestContext, TestServer) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let state = AppState {
        db: test.db.clone().unwrap(),
        tokens: TokenManager::new("test-secret", 3600),
    };

    let server = TestServer::new(router().with_state(state)).unwrap();

    (test, server)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
