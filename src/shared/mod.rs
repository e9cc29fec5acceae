//! Shared Module
//!
//! Platform-agnostic types used by the desktop client: the book model, pure
//! form validation, configuration and error types. Nothing in here touches
//! egui or the network.

/// Book draft and record types
pub mod book;

/// Shared error types
pub mod error;

/// Pure form validation
pub mod validation;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use book::{Book, BookDraft, BookRow, BookValue};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ClientError;
pub use validation::{Field, FieldCheck, ValidationReport};
