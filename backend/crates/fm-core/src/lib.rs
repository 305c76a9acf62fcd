pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::identity_claim::IdentityClaim;
pub use models::user::User;
