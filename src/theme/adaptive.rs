//! Light/dark theme pairs and the color mode that picks between them.
//!
//! The current [`ColorMode`] comes from a process-wide source. Applications
//! that track the mode themselves (a settings toggle, a media query bridge)
//! install it with [`set_theme_detector`]. With the `os-theme` cargo feature
//! the initial source asks the operating system; without it the initial mode
//! is [`ColorMode::Light`].

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

use super::definition::ThemeDefinition;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// A component theme with separate light and dark definitions.
///
/// Libraries ship both palettes; [`AdaptiveTheme::resolve`] picks the one
/// matching the current color mode so it can serve as the default layer of
/// theme resolution.
///
/// # Example
///
/// ```rust
/// use livery::{AdaptiveTheme, ColorMode, ThemeDefinition, TokenMap};
///
/// let light = ThemeDefinition::new("Button").common(TokenMap::new().with("baseColor", "#fff"));
/// let dark = ThemeDefinition::new("Button").common(TokenMap::new().with("baseColor", "#000"));
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// let theme = adaptive.for_mode(ColorMode::Dark);
/// assert_eq!(theme.common_tokens().unwrap().get_str("baseColor"), Some("#000"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: ThemeDefinition,
    dark: ThemeDefinition,
}

impl AdaptiveTheme {
    pub fn new(light: ThemeDefinition, dark: ThemeDefinition) -> Self {
        Self { light, dark }
    }

    pub fn for_mode(&self, mode: ColorMode) -> &ThemeDefinition {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Resolves to the definition for the detected color mode.
    pub fn resolve(&self) -> &ThemeDefinition {
        self.for_mode(detect_color_mode())
    }
}

/// A source of the current color mode.
pub type ThemeDetector = fn() -> ColorMode;

static COLOR_MODE_SOURCE: Lazy<RwLock<ThemeDetector>> =
    Lazy::new(|| RwLock::new(initial_color_mode_source()));

/// Installs the color mode source consulted by [`AdaptiveTheme::resolve`].
pub fn set_theme_detector(detector: ThemeDetector) {
    *COLOR_MODE_SOURCE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = detector;
}

/// Restores the source the process started with.
pub fn reset_theme_detector() {
    set_theme_detector(initial_color_mode_source());
}

/// Returns the color mode reported by the installed source.
pub fn detect_color_mode() -> ColorMode {
    let source = *COLOR_MODE_SOURCE
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    source()
}

#[cfg(feature = "os-theme")]
fn initial_color_mode_source() -> ThemeDetector {
    fn system_color_mode() -> ColorMode {
        match dark_light::detect() {
            dark_light::Mode::Dark => ColorMode::Dark,
            dark_light::Mode::Light => ColorMode::Light,
        }
    }
    system_color_mode
}

#[cfg(not(feature = "os-theme"))]
fn initial_color_mode_source() -> ThemeDetector {
    ColorMode::default
}
