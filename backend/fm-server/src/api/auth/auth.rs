//! Launch-data authentication handlers
//!
//! Every verification failure becomes the same 401. The cause is only
//! logged and counted.

use crate::{
    ApiError, ApiResult, AppState, AuthenticateRequest, ClaimRequest, ClaimResponse, ClientAddr,
    UserResponse,
};

use fm_core::IdentityClaim;
use fm_db::UserRepository;

use std::net::IpAddr;
use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;
use log::{info, warn};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/telegram
///
/// Verify launch data, then create or refresh the user it identifies
pub async fn authenticate(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    Json(request): Json<AuthenticateRequest>,
) -> ApiResult<Json<UserResponse>> {
    let claim = verify_launch_data(&state, client, &request.init_data)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.upsert_claim(&claim).await?;

    info!("Telegram user {} signed in as {}", user.telegram_id, user.id);

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/v1/auth/telegram/verify
///
/// Verify launch data without touching storage
pub async fn verify(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    Json(request): Json<AuthenticateRequest>,
) -> ApiResult<Json<ClaimResponse>> {
    let claim = verify_launch_data(&state, client, &request.init_data)?;

    Ok(Json(ClaimResponse {
        claim: claim.into(),
    }))
}

/// POST /api/v1/auth/telegram/claim
///
/// Reconcile a claim verified by a trusted upstream. Only routed when
/// `auth.accept_upstream_claims` is set.
pub async fn claim(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    Json(request): Json<ClaimRequest>,
) -> ApiResult<Json<UserResponse>> {
    state.rate_limiter.check(client)?;

    let claim = IdentityClaim::from(request);
    claim.validate()?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.upsert_claim(&claim).await?;

    info!(
        "Telegram user {} reconciled from upstream claim",
        user.telegram_id
    );

    Ok(Json(UserResponse { user: user.into() }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn verify_launch_data(
    state: &AppState,
    client: IpAddr,
    init_data: &str,
) -> ApiResult<IdentityClaim> {
    state.rate_limiter.check(client)?;

    let validator = state
        .validator()
        .inspect_err(|_| state.metrics.configuration_error())?;

    match validator.verify(init_data) {
        Ok(claim) => {
            state.metrics.verification_succeeded();
            Ok(claim)
        }
        Err(rejection) => {
            warn!("Launch data from {} rejected: {}", client, rejection);
            state.metrics.verification_rejected(rejection);
            Err(ApiError::Unauthenticated {
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
