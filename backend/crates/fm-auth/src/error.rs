use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The bot token is not configured. This is a broken deployment, not a
    /// forged payload, and must never be reported as "not authenticated".
    #[error("Telegram bot token not configured {location}")]
    MissingBotToken { location: ErrorLocation },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingBotToken { .. } => "CONFIGURATION_ERROR",
            Self::RateLimitExceeded { .. } => "RATE_LIMITED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
