#[allow(clippy::module_inception)]
pub mod auth;
pub mod authenticate_request;
pub mod claim_dto;
pub mod claim_request;
pub mod claim_response;
pub mod user_dto;
pub mod user_response;
