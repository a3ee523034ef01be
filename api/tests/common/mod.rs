//! Shared setup for API integration tests

#![allow(dead_code)]

use rt_api::AppState;
use rt_infra::DatabasePool;
use rt_shared::AppConfig;

pub const TEST_SECRET: &str = "test-secret";

/// Application state over a fresh in-memory database
pub async fn test_state() -> AppState {
    let config = AppConfig::for_testing(TEST_SECRET);
    let pool = DatabasePool::new(config.database.clone())
        .await
        .expect("in-memory pool");
    pool.ensure_schema().await.expect("schema");
    AppState::new(pool, &config).expect("app state")
}

pub fn registration(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": "Pat",
        "lastName": "Lee",
        "email": email,
        "phone": "555-0100",
        "password": password,
        "role": "owner"
    })
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
