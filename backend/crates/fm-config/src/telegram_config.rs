use std::fmt;

use serde::Deserialize;

/// Telegram bot settings.
///
/// The bot token is the shared secret for launch-data verification. It is
/// optional here: a missing token is reported per request as a configuration
/// error, not at startup.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
}

impl TelegramConfig {
    /// Token with blank values treated as absent
    pub fn bot_token(&self) -> Option<&str> {
        self.bot_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &self.bot_token().map(|_| "<redacted>"))
            .finish()
    }
}
