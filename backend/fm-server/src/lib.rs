pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{authenticate, claim, verify},
        authenticate_request::AuthenticateRequest,
        claim_dto::ClaimDto,
        claim_request::ClaimRequest,
        claim_response::ClaimResponse,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::client_addr::ClientAddr,
    users::users::get_user,
};

pub use crate::app_state::AppState;
pub use crate::metrics::AuthMetrics;
pub use crate::routes::build_router;
