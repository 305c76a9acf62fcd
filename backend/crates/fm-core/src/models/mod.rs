pub mod identity_claim;
pub mod user;
