use fm_core::IdentityClaim;

use serde::Deserialize;

/// An identity claim already verified by a trusted upstream
#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    pub telegram_id: i64,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub photo_url: Option<String>,

    /// Seconds since epoch; 0 when omitted
    #[serde(default)]
    pub auth_date: i64,
}

impl From<ClaimRequest> for IdentityClaim {
    fn from(r: ClaimRequest) -> Self {
        Self {
            telegram_id: r.telegram_id,
            username: r.username,
            first_name: r.first_name,
            last_name: r.last_name,
            photo_url: r.photo_url,
            auth_date: r.auth_date,
        }
    }
}
