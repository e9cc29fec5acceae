//! Theme Module
//!
//! Color scheme and styling for the bookstore admin UI:
//!
//! - Color constants for the slate/violet palette
//! - Frame builders and border helpers for consistent UI appearance
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookstore_admin::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_DARK, "Books");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
