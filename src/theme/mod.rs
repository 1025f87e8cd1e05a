//! Theme model and resolution.
//!
//! This module provides:
//!
//! - [`TokenValue`] / [`TokenMap`]: design tokens
//! - [`ThemeDefinition`]: a component family's common tokens, self generator and peers
//! - [`ThemeOverride`]: partial, layerable patches
//! - [`resolve_theme`]: the precedence-ordered merge producing a [`MergedTheme`]
//! - [`AdaptiveTheme`] / [`ThemeChoice`]: light and dark library defaults

mod adaptive;
mod choice;
pub mod common;
mod definition;
mod resolve;
mod tokens;

pub use adaptive::{
    detect_color_mode, reset_theme_detector, set_theme_detector, AdaptiveTheme, ColorMode,
    ThemeDetector,
};
pub use choice::ThemeChoice;
pub(crate) use definition::{merge_peer_overrides, merge_peer_themes};
pub use definition::{SelfGenerator, ThemeDefinition, ThemeOverride};
pub use resolve::{resolve_theme, MergedTheme, ThemeProps};
pub use tokens::{TokenMap, TokenValue};
