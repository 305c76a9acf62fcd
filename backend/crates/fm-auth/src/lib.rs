pub mod auth_rate_limiter;
pub mod error;
pub mod init_data_validator;
pub mod launch_data;
pub mod rate_limit_config;
pub mod rejection;
pub mod web_app_user;

pub use auth_rate_limiter::AuthRateLimiter;
pub use error::{AuthError, Result};
pub use init_data_validator::{InitDataValidator, WEB_APP_DATA_KEY};
pub use launch_data::LaunchData;
pub use rate_limit_config::RateLimitConfig;
pub use rejection::Rejection;
pub use web_app_user::WebAppUser;

#[cfg(test)]
mod tests;
