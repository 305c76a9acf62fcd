use serde::Deserialize;

/// The JSON object carried in the `user` field of Telegram launch data.
///
/// Telegram sends more keys than these (`language_code`, `is_premium`, ...);
/// unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
}
