//! Compact, self-contained authentication tokens.
//!
//! This crate provides:
//! - A codec for the `header.payload.signature` text format (HMAC-SHA256)
//! - `TokenService` for issuing, verifying and rotating access/refresh pairs
//! - Environment configuration, tracing setup and HTTP boundary helpers

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infra;

#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
pub use domain::*;

pub use application::app_error::{ErrorCode, TokenError, TokenResult};
pub use application::clock::{Clock, ManualClock, SystemClock};
pub use application::token_service::TokenService;
pub use infra::config::TokenConfig;
pub use infra::error::ConfigError;
