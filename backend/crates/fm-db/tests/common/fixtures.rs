use fm_core::{IdentityClaim, User};

/// Creates a fully populated claim for `telegram_id`
pub fn create_test_claim(telegram_id: i64) -> IdentityClaim {
    IdentityClaim {
        telegram_id,
        username: Some(format!("user{}", telegram_id)),
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
        photo_url: Some(format!("https://t.me/i/userpic/320/{}.jpg", telegram_id)),
        auth_date: 1_700_000_000,
    }
}

/// Creates a claim with a specific display handle
pub fn create_test_claim_with_handle(telegram_id: i64, handle: &str) -> IdentityClaim {
    IdentityClaim {
        username: Some(handle.to_string()),
        ..create_test_claim(telegram_id)
    }
}

/// True when every identity field of `user` equals the claim's
pub fn user_matches_claim(user: &User, claim: &IdentityClaim) -> bool {
    user.telegram_id == claim.telegram_id
        && user.username == claim.username
        && user.first_name == claim.first_name
        && user.last_name == claim.last_name
        && user.photo_url == claim.photo_url
        && user.auth_date == claim.auth_date
}
