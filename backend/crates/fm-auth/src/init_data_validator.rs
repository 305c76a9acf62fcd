use crate::launch_data::{AUTH_DATE_KEY, HASH_KEY, USER_KEY};
use crate::{AuthError, LaunchData, Rejection, Result as AuthErrorResult, WebAppUser};

use fm_core::IdentityClaim;

use std::panic::Location;

use error_location::ErrorLocation;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// HMAC key used to derive the signing key from the bot token
pub const WEB_APP_DATA_KEY: &[u8] = b"WebAppData";

type HmacSha256 = Hmac<Sha256>;

/// Verifies Telegram Mini-App launch data.
///
/// Signing key: `HMAC-SHA256(key = "WebAppData", msg = bot_token)`, raw bytes.
/// Signature: lowercase hex of `HMAC-SHA256(key = signing key, msg =
/// data-check string)`.
pub struct InitDataValidator {
    secret_key: [u8; 32],
}

impl InitDataValidator {
    /// Build a validator from the configured bot token.
    ///
    /// A missing or blank token is a deployment error and is returned before
    /// any HMAC work happens.
    #[track_caller]
    pub fn from_bot_token(bot_token: Option<&str>) -> AuthErrorResult<Self> {
        let bot_token = bot_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| AuthError::MissingBotToken {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut mac = new_mac(WEB_APP_DATA_KEY);
        mac.update(bot_token.as_bytes());

        let mut secret_key = [0u8; 32];
        secret_key.copy_from_slice(&mac.finalize().into_bytes());

        Ok(Self { secret_key })
    }

    /// Hex signature of a data-check string
    pub fn sign(&self, data_check_string: &str) -> String {
        let mut mac = new_mac(&self.secret_key);
        mac.update(data_check_string.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Sign `launch` and return it as init data with `hash` appended.
    /// Any `hash` already present is ignored by the signature.
    pub fn sign_launch_data(&self, launch: &LaunchData) -> String {
        let hash = self.sign(&launch.data_check_string());
        let mut signed = LaunchData::from_pairs(
            launch
                .pairs()
                .iter()
                .filter(|(k, _)| k != HASH_KEY)
                .cloned(),
        );
        signed.push(HASH_KEY, hash);
        signed.to_query_string()
    }

    /// Verify raw init data and extract the identity claim.
    ///
    /// Nothing in the payload is read before the signature check passes.
    pub fn verify(&self, init_data: &str) -> Result<IdentityClaim, Rejection> {
        let launch = LaunchData::parse(init_data);

        let hash = launch
            .get(HASH_KEY)
            .filter(|hash| !hash.is_empty())
            .ok_or(Rejection::MissingHash)?;

        self.verify_signature(&launch.data_check_string(), hash)?;

        let user_json = launch
            .get(USER_KEY)
            .filter(|user| !user.is_empty())
            .ok_or(Rejection::MissingUser)?;

        let user: WebAppUser =
            serde_json::from_str(user_json).map_err(|_| Rejection::MalformedUser)?;

        let auth_date = launch
            .get(AUTH_DATE_KEY)
            .and_then(parse_leading_int)
            .unwrap_or(0);

        Ok(IdentityClaim {
            telegram_id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            photo_url: user.photo_url,
            auth_date,
        })
    }

    /// Constant-time comparison against the lowercase hex signature.
    fn verify_signature(&self, data_check_string: &str, hash: &str) -> Result<(), Rejection> {
        // Only the exact lowercase encoding is accepted
        if !hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(Rejection::SignatureMismatch);
        }
        let expected = hex::decode(hash).map_err(|_| Rejection::SignatureMismatch)?;

        let mut mac = new_mac(&self.secret_key);
        mac.update(data_check_string.as_bytes());
        mac.verify_slice(&expected)
            .map_err(|_| Rejection::SignatureMismatch)
    }
}

/// Base-10 integer at the start of `value`, after leading whitespace.
/// Trailing characters are ignored, so `"12abc"` reads as 12.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    let sign_len = value.len() - unsigned.len();
    value[..sign_len + digits].parse().ok()
}

fn new_mac(key: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC can take key of any size")
}
