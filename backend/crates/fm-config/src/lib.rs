mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod telegram_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use telegram_config::TelegramConfig;

const CONFIG_DIR_ENV: &str = "FM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".fm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DATABASE_FILENAME: &str = "diary.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_ACCEPT_UPSTREAM_CLAIMS: bool = false;

const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 120;
const MIN_RATE_LIMIT_REQUESTS: u32 = 1;
const MAX_RATE_LIMIT_REQUESTS: u32 = 100_000;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
