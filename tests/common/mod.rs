//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Mock backend helpers
//! - Custom assertion macros

pub mod assertions;
pub mod mock_server;

// Re-export commonly used utilities
pub use mock_server::*;
