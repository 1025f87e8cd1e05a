//! Default theme selection for resolution.

use super::adaptive::AdaptiveTheme;
use super::definition::ThemeDefinition;

/// Reference to either a fixed default theme or an adaptive one.
///
/// Components accept a `ThemeChoice` as their library default so the same
/// call site works with single-palette and light/dark theme families.
#[derive(Debug, Clone, Copy)]
pub enum ThemeChoice<'a> {
    /// A definition that does not change with the color mode.
    Fixed(&'a ThemeDefinition),
    /// Light/dark definitions selected by the detected color mode.
    Adaptive(&'a AdaptiveTheme),
}

impl<'a> ThemeChoice<'a> {
    /// Resolves to a concrete definition.
    pub fn resolve(&self) -> &'a ThemeDefinition {
        match *self {
            ThemeChoice::Fixed(theme) => theme,
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a ThemeDefinition> for ThemeChoice<'a> {
    fn from(theme: &'a ThemeDefinition) -> Self {
        ThemeChoice::Fixed(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
