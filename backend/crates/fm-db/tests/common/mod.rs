#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{create_test_claim, create_test_claim_with_handle, user_matches_claim};
pub use test_db::create_test_pool;
