//! Test suite for the bookstore admin client
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
