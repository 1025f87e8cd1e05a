//! CSS custom properties derived from a merged theme.

use std::fmt::Display;

use crate::theme::{MergedTheme, TokenValue};
use crate::util::create_key;

/// An ordered set of CSS custom properties for a component's style attribute.
///
/// Tokens that no theme layer defines are skipped rather than written as
/// empty values, so the stylesheet's own fallbacks apply.
///
/// # Example
///
/// ```rust
/// use livery::{resolve_theme, CssVars, ThemeDefinition, ThemeProps, TokenMap};
///
/// let theme = ThemeDefinition::new("Button")
///     .common(TokenMap::new().with("cubicBezierEaseInOut", "ease"))
///     .self_tokens(|_| TokenMap::new().with("heightMedium", "34px").with("heightLarge", "40px"));
/// let merged = resolve_theme("Button", &theme, &ThemeProps::new(), None).unwrap();
///
/// let vars = CssVars::new()
///     .common(&merged, "--bezier", "cubicBezierEaseInOut")
///     .variant(&merged, "--height", "height", "large");
///
/// assert_eq!(vars.to_style_string(), "--bezier: ease; --height: 40px;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVars {
    vars: Vec<(String, String)>,
}

impl CssVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property to a literal value, replacing an earlier one.
    pub fn set<V: Display>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value.to_string());
        self
    }

    /// Sets a property from a token if it is present.
    pub fn token(mut self, name: &str, value: Option<&TokenValue>) -> Self {
        if let Some(value) = value {
            self.insert(name, value.to_string());
        }
        self
    }

    /// Sets a property from a common token.
    pub fn common(self, theme: &MergedTheme, name: &str, token: &str) -> Self {
        let value = theme.common.get(token);
        self.token(name, value)
    }

    /// Sets a property from a self token.
    pub fn self_token(self, theme: &MergedTheme, name: &str, token: &str) -> Self {
        let value = theme.self_tokens.get(token);
        self.token(name, value)
    }

    /// Sets a property from the self token `create_key(base, variant)`.
    pub fn variant(self, theme: &MergedTheme, name: &str, base: &str, variant: &str) -> Self {
        let value = theme.self_tokens.get(&create_key(base, variant));
        self.token(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Renders as an inline style declaration list.
    pub fn to_style_string(&self) -> String {
        self.vars
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn insert(&mut self, name: &str, value: String) {
        match self.vars.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.vars.push((name.to_string(), value)),
        }
    }
}
