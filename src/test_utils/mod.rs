//! Test utilities for unit and HTTP-level testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory repository implementations for mocking persistence
//! - A builder for an `AppState` wired to those mocks
//! - Ephemeral TCP servers for client tests

mod app_state_builder;
mod factories;
mod server;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use server::*;
pub use waitlist_mocks::*;
