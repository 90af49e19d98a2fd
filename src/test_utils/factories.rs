//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use std::sync::Arc;

use time::Duration;

use crate::{
    application::{clock::ManualClock, token_service::TokenService},
    domain::Principal,
    infra::config::TokenConfig,
};

/// 2023-11-14T22:13:20Z
pub const TEST_NOW: i64 = 1_700_000_000;
pub const TEST_ACCESS_SECRET: &str = "test-access-secret";
pub const TEST_REFRESH_SECRET: &str = "test-refresh-secret";

/// Create a test principal with sensible defaults.
pub fn create_test_principal(overrides: impl FnOnce(&mut Principal)) -> Principal {
    let mut principal = Principal::new("u1", "a@b.com", "A");
    overrides(&mut principal);
    principal
}

/// 45 minute access tokens, 7 day refresh tokens.
pub fn create_test_config() -> TokenConfig {
    TokenConfig::new(
        TEST_ACCESS_SECRET,
        TEST_REFRESH_SECRET,
        Duration::minutes(45),
        Duration::days(7),
    )
    .expect("test config is valid")
}

pub fn create_test_service(clock: Arc<ManualClock>) -> TokenService {
    TokenService::new(create_test_config(), clock)
}
