//! Integration tests against a mocked backend

pub mod api;
pub mod flows_test;
