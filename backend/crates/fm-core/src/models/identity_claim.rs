//! Identity claim - the verified identity extracted from Telegram launch data.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity asserted by a signed Telegram Mini-App launch payload.
///
/// Produced by the launch-data verifier and consumed by user reconciliation.
/// Never persisted directly; its fields are copied onto a [`crate::User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// Platform-assigned Telegram user id
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    /// Seconds since epoch, taken from the payload's `auth_date` field
    pub auth_date: i64,
}

impl IdentityClaim {
    /// Create a claim carrying only the identity number and timestamp
    pub fn new(telegram_id: i64, auth_date: i64) -> Self {
        Self {
            telegram_id,
            username: None,
            first_name: None,
            last_name: None,
            photo_url: None,
            auth_date,
        }
    }

    /// Validate a claim that did not come through the verifier.
    ///
    /// Claims forwarded by an upstream that already checked the signature are
    /// only trusted to be well-formed, so the identity number is still checked.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.telegram_id <= 0 {
            return Err(CoreError::Validation {
                field: "telegram_id",
                message: format!("telegram_id must be positive, got {}", self.telegram_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.auth_date < 0 {
            return Err(CoreError::Validation {
                field: "auth_date",
                message: "auth_date cannot be negative".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
