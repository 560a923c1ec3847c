//! Centralized theme for the dashboard TUI.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builders and enum-keyed indicators

pub mod palette;
pub mod styles;
