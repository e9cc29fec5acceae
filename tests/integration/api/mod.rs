//! HTTP client tests
//!
//! Tests for the login, registration and book endpoints.

pub mod auth_test;
pub mod book_test;
