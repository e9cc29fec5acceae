//! egui Native Desktop App Module
//!
//! Desktop client for the bookstore backend: a login page, a registration
//! page, and a dashboard that lists books and adds new ones.
//!
//! # Architecture
//!
//! - **`config`** - Configuration (server URL, endpoint paths, storage location)
//! - **`api`** - `BookstoreApi` trait and the reqwest-backed `HttpApi`
//! - **`storage`** - Persistent key/value store holding the token and book cache
//! - **`form`** - Per-field validation feedback with timed auto-hide
//! - **`auth`** - Login and registration flows
//! - **`dashboard`** - Book table and add-book flow
//! - **`state`** - `AppState`, which owns the flows and runs requests off the UI thread
//! - **`views`** / **`theme`** - egui rendering
//! - **`debug`** - In-app log console
//! - **`main`** - Application entry point (binary)
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin bookstore_app
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod debug;
pub mod form;
pub mod logging;
pub mod state;
pub mod storage;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::{BookstoreApi, HttpApi};
pub use auth::{LoginFlow, RegisterFlow};
pub use config::Config;
pub use dashboard::{DashboardFlow, DashboardSubmit};
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use state::AppState;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use types::{AppView, Outcome};
