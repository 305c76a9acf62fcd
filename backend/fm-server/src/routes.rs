use crate::{AppState, authenticate, claim, get_user, health, verify};

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use log::warn;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let mut api = Router::new()
        .route("/auth/telegram", post(authenticate))
        .route("/auth/telegram/verify", post(verify))
        .route("/users/{telegram_id}", get(get_user));

    // Trusts its caller, so only mounted on request
    if state.accept_upstream_claims {
        warn!("Upstream identity claims ENABLED at /api/v1/auth/telegram/claim");
        api = api.route("/auth/telegram/claim", post(claim));
    }

    let request_timeout = state.request_timeout;

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_timeout_layer(request_timeout))
                // The Mini-App is served from Telegram's origin
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// Requests still running after `timeout` are answered with 408
pub fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
