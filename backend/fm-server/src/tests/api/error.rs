use crate::ApiError;
use crate::api::error::UNAUTHENTICATED_MESSAGE;

use fm_auth::{AuthError, AuthRateLimiter, InitDataValidator, RateLimitConfig};
use fm_core::IdentityClaim;

use std::net::{IpAddr, Ipv4Addr};
use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::{eq, some};
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_unauthenticated_returns_401_with_fixed_message() {
    let error = ApiError::Unauthenticated {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"]["message"], UNAUTHENTICATED_MESSAGE);
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_missing_bot_token_returns_500_configuration_error() {
    let auth_error = InitDataValidator::from_bot_token(None).err().unwrap();

    let (status, json) = body_json(ApiError::from(auth_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "CONFIGURATION_ERROR");
    // Never mentions the token itself
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("token")
    );
}

#[tokio::test]
async fn test_rate_limit_exceeded_returns_429() {
    let limiter = AuthRateLimiter::new(RateLimitConfig {
        max_requests: 1,
        window_secs: 3600,
    });
    let client = IpAddr::V4(Ipv4Addr::LOCALHOST);
    limiter.check(client).unwrap();
    let auth_error = limiter.check(client).unwrap_err();

    let (status, json) = body_json(ApiError::from(auth_error)).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User 42 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User 42 not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "must be positive".into(),
        field: Some("telegram_id".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "telegram_id");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_invalid_claim_converts_to_validation_with_field() {
    let core_error = IdentityClaim::new(0, 0).validate().unwrap_err();

    let api_error = ApiError::from(core_error);

    let ApiError::Validation { field, .. } = api_error else {
        panic!("expected a validation error");
    };
    assert_that!(field.as_deref(), some(eq("telegram_id")));
}

#[test]
fn test_auth_errors_map_by_kind() {
    let missing = AuthError::MissingBotToken {
        location: ErrorLocation::from(Location::caller()),
    };
    let limited = AuthError::RateLimitExceeded {
        limit: 1,
        window_secs: 1,
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(matches!(
        ApiError::from(missing),
        ApiError::Configuration { .. }
    ));
    assert!(matches!(
        ApiError::from(limited),
        ApiError::RateLimited { .. }
    ));
}
