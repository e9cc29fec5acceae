//! Color Constants for the Bookstore Admin Theme
//!
//! A light slate palette with a violet accent. Field borders switch to
//! `ERROR` or `ACCENT` depending on validation feedback.

use eframe::egui::Color32;

/// Page background - Slate 50
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF8, 0xFA, 0xFC);

/// Card and modal background - White
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border - Slate 200
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE2, 0xE8, 0xF0);

/// Top bar background - Slate 900
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x0F, 0x17, 0x2A);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF8, 0xFA, 0xFC);

/// Text on light backgrounds - Gray 900
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Muted text - Gray 500
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Accent and "valid field" border - Violet
pub const ACCENT: Color32 = Color32::from_rgb(0x8E, 0x51, 0xFF);

/// Accent hover
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x7C, 0x3A, 0xED);

/// Error text and border - Red 500
pub const ERROR: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

/// Neutral input border - Gray 300
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Table header background - Gray 50
pub const TABLE_HEADER_BG: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Debug console background
pub const DEBUG_BG: Color32 = Color32::from_rgb(0x1E, 0x29, 0x3B);
