//! User entity - one row per Telegram identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A diary user, keyed by the unique Telegram id.
///
/// Profile fields are last-write-wins from the most recent successful
/// verification; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique external identity number
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    /// Time of the last successful verification (seconds since epoch)
    pub auth_date: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
