use crate::{CoreError, IdentityClaim};

use googletest::prelude::*;

#[test]
fn given_positive_telegram_id_when_validated_then_ok() {
    let claim = IdentityClaim::new(42, 1_700_000_000);

    assert_that!(claim.validate(), ok(anything()));
}

#[test]
fn given_zero_telegram_id_when_validated_then_field_is_reported() {
    let claim = IdentityClaim::new(0, 1_700_000_000);

    let result = claim.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "telegram_id",
            ..
        })
    ));
}

#[test]
fn given_negative_auth_date_when_validated_then_error() {
    let claim = IdentityClaim::new(42, -1);

    let result = claim.validate();

    assert_that!(result, err(anything()));
    let message = result.unwrap_err().to_string();
    assert_that!(message, contains_substring("auth_date"));
}
