#![allow(dead_code)]

//! Test infrastructure for fm-server API tests

use fm_auth::{AuthRateLimiter, InitDataValidator, LaunchData, RateLimitConfig};
use fm_server::{AppState, AuthMetrics};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, extract::ConnectInfo, http::Request, response::Response};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_BOT_TOKEN: &str = "987654:server-integration-test-token";

pub const ALICE_USER_JSON: &str =
    r#"{"id":42,"first_name":"Alice","last_name":"Liddell","username":"alice","language_code":"en"}"#;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    fm_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Knobs for [`create_test_app_state_with`]
pub struct TestStateOptions {
    pub bot_token: Option<&'static str>,
    pub rate_limit: RateLimitConfig,
    pub accept_upstream_claims: bool,
}

impl Default for TestStateOptions {
    fn default() -> Self {
        Self {
            bot_token: Some(TEST_BOT_TOKEN),
            rate_limit: RateLimitConfig {
                max_requests: 10_000,
                window_secs: 60,
            },
            accept_upstream_claims: false,
        }
    }
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(TestStateOptions::default()).await
}

pub async fn create_test_app_state_with(options: TestStateOptions) -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        validator: InitDataValidator::from_bot_token(options.bot_token)
            .ok()
            .map(Arc::new),
        rate_limiter: Arc::new(AuthRateLimiter::new(options.rate_limit)),
        metrics: AuthMetrics::new(),
        accept_upstream_claims: options.accept_upstream_claims,
        request_timeout: Duration::from_secs(30),
    }
}

/// Launch data for `pairs`, signed with `bot_token`
pub fn sign_with(bot_token: &str, pairs: &[(&str, &str)]) -> String {
    let validator =
        InitDataValidator::from_bot_token(Some(bot_token)).expect("Failed to build validator");
    validator.sign_launch_data(&LaunchData::from_pairs(pairs.iter().copied()))
}

/// Launch data for `pairs`, signed with the test bot token
pub fn signed_init_data(pairs: &[(&str, &str)]) -> String {
    sign_with(TEST_BOT_TOKEN, pairs)
}

pub fn user_json(telegram_id: i64, username: &str) -> String {
    serde_json::json!({
        "id": telegram_id,
        "first_name": "Test",
        "username": username,
    })
    .to_string()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST `body` as if sent from `client`, e.g. "10.0.0.1:40000"
pub fn post_json_from(uri: &str, body: serde_json::Value, client: &str) -> Request<Body> {
    let peer: SocketAddr = client.parse().unwrap();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .extension(ConnectInfo(peer))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
