use crate::AuthMetrics;

use fm_auth::{AuthError, AuthRateLimiter, InitDataValidator, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Shared application state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// None when no bot token is configured
    pub validator: Option<Arc<InitDataValidator>>,
    pub rate_limiter: Arc<AuthRateLimiter>,
    pub metrics: AuthMetrics,
    /// Mounts the upstream claim route
    pub accept_upstream_claims: bool,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn from_config(pool: SqlitePool, config: &fm_config::Config) -> Self {
        let validator = InitDataValidator::from_bot_token(config.telegram.bot_token())
            .ok()
            .map(Arc::new);

        let rate_limiter = AuthRateLimiter::new(fm_auth::RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        });

        Self {
            pool,
            validator,
            rate_limiter: Arc::new(rate_limiter),
            metrics: AuthMetrics::new(),
            accept_upstream_claims: config.auth.accept_upstream_claims,
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        }
    }

    /// The launch-data validator, or a configuration error when the bot
    /// token is missing.
    #[track_caller]
    pub fn validator(&self) -> AuthErrorResult<&InitDataValidator> {
        self.validator
            .as_deref()
            .ok_or_else(|| AuthError::MissingBotToken {
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
