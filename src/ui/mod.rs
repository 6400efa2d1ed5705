//! User Interface layer
//!
//! This module contains all rendering code:
//! - Theme built from the stored primary palette
//! - Reusable widgets (spinner, snackbars, status bar)
//! - Screen and tab renderers

pub mod theme;
pub mod render;
pub mod widgets;

pub use theme::Theme;
pub use render::render;
