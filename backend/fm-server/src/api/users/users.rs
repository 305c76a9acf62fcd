//! User REST API handlers

use crate::{ApiError, ApiResult, AppState, UserResponse};

use fm_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

/// GET /api/v1/users/{telegram_id}
///
/// Current-user lookup by Telegram id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let telegram_id: i64 = id.parse().map_err(|_| ApiError::Validation {
        message: format!("Invalid telegram id: {}", id),
        field: Some("telegram_id".into()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_telegram_id(telegram_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", telegram_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}
