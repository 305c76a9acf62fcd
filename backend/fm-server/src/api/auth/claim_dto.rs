use fm_core::IdentityClaim;

use serde::Serialize;

/// Verified identity, not yet persisted
#[derive(Debug, Serialize)]
pub struct ClaimDto {
    pub telegram_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub auth_date: i64,
}

impl From<IdentityClaim> for ClaimDto {
    fn from(c: IdentityClaim) -> Self {
        Self {
            telegram_id: c.telegram_id,
            username: c.username,
            first_name: c.first_name,
            last_name: c.last_name,
            photo_url: c.photo_url,
            auth_date: c.auth_date,
        }
    }
}
