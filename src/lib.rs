//! Bookstore Admin - Main Library
//!
//! Native desktop client for a small bookstore management backend. Users log
//! in or register, then manage the book listing from a dashboard that adds
//! new books through the backend's REST API.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Book draft/record model
//!   - Pure form validation
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Login, registration and dashboard flows
//!   - HTTP client for the backend
//!   - Persistent local storage for the session token and book cache
//!   - Views, theme and debug console
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookstore_admin::egui_app::{AppState, Config};
//!
//! let state = AppState::from_config(Config::default()).unwrap();
//! assert!(!state.has_pending());
//! ```
//!
//! # Backend Contract
//!
//! | Method | Path             | Body                                           |
//! |--------|------------------|------------------------------------------------|
//! | POST   | `/auth/login`    | `{username, password}` → `{token}`             |
//! | POST   | `/auth/register` | `{username, password, confirmPassword}`        |
//! | POST   | `/book`          | `{title, author, summary, price, quantity}` with `Authorization: Bearer` |
//!
//! Error bodies carry an optional `message`. A 403 from `/book` clears the
//! stored token and returns the user to the login page.
//!
//! # Thread Safety
//!
//! - egui is single-threaded immediate mode GUI; `AppState` lives on the UI thread
//! - Each backend request runs on its own worker thread and reports back over a channel

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
