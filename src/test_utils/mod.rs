//! Test utilities shared by unit tests.
//!
//! This module provides:
//! - Fixture factories for principals and configuration
//! - A token service wired to a manually driven clock

mod factories;

pub use factories::*;
