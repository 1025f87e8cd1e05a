//! Theme resolution: merging defaults, provider layers and instance props.
//!
//! [`resolve_theme`] computes a component's [`MergedTheme`] from its library
//! default definition, the ambient [`ConfigProvider`] (if any) and the
//! instance's [`ThemeProps`].
//!
//! # Precedence
//!
//! Common tokens, lowest to highest:
//!
//! 1. Base: the first present of the instance theme, the provider's
//!    per-component theme, the provider's common theme, the library default.
//!    Default keys missing from that base are filled in from the default.
//! 2. Provider common overrides.
//! 3. Provider per-component common overrides.
//! 4. Instance common overrides.
//!
//! Self tokens are then generated from the merged common tokens, so common
//! overrides flow into derived values, and layered in this order:
//!
//! 1. Built-in overrides baked into the component.
//! 2. Provider per-component overrides.
//! 3. Instance overrides.
//!
//! Peers and peer overrides merge the same way: library, provider, instance.

use std::collections::BTreeMap;

use super::definition::{merge_peer_overrides, merge_peer_themes, ThemeDefinition, ThemeOverride};
use super::tokens::{TokenMap, TokenValue};
use crate::error::ThemeError;
use crate::provider::ConfigProvider;
use crate::util::create_key;

/// Theme-related properties of a component instance.
#[derive(Debug, Clone, Default)]
pub struct ThemeProps {
    /// Replaces parts of the theme definition itself.
    pub theme: Option<ThemeDefinition>,
    /// Overrides set by the application on this instance.
    pub theme_overrides: Option<ThemeOverride>,
    /// Overrides baked in by a parent component; lowest override priority.
    pub builtin_theme_overrides: Option<ThemeOverride>,
}

impl ThemeProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: ThemeDefinition) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn theme_overrides(mut self, overrides: ThemeOverride) -> Self {
        self.theme_overrides = Some(overrides);
        self
    }

    pub fn builtin_theme_overrides(mut self, overrides: ThemeOverride) -> Self {
        self.builtin_theme_overrides = Some(overrides);
        self
    }
}

/// A component's effective theme.
#[derive(Debug, Clone)]
pub struct MergedTheme {
    pub common: TokenMap,
    pub self_tokens: TokenMap,
    pub peers: BTreeMap<String, ThemeDefinition>,
    pub peer_overrides: BTreeMap<String, ThemeOverride>,
}

impl MergedTheme {
    /// Looks up a variant of a self token, e.g. `("height", "large")`.
    pub fn self_variant(&self, base: &str, variant: &str) -> Option<&TokenValue> {
        self.self_tokens.get(&create_key(base, variant))
    }

    /// Builds the theme props for an embedded sub-component.
    pub fn peer_props(&self, name: &str) -> ThemeProps {
        ThemeProps {
            theme: self.peers.get(name).cloned(),
            theme_overrides: self.peer_overrides.get(name).cloned(),
            builtin_theme_overrides: None,
        }
    }
}

/// Resolves the merged theme of component `resolve_id`.
///
/// # Errors
///
/// Returns [`ThemeError::MissingCommon`] or [`ThemeError::MissingSelfGenerator`]
/// when no layer, including `default_theme`, supplies common tokens or a self
/// generator.
///
/// # Example
///
/// ```rust
/// use livery::{resolve_theme, ThemeDefinition, ThemeOverride, ThemeProps, TokenMap};
///
/// let default_theme = ThemeDefinition::new("Badge")
///     .common(TokenMap::new().with("a", 1).with("b", 2))
///     .self_tokens(|c| TokenMap::new().with("x", c.get_f64("a").unwrap_or(0.0) * 10.0));
///
/// let props = ThemeProps::new().theme_overrides(ThemeOverride::new().common_token("a", 9));
/// let merged = resolve_theme("Badge", &default_theme, &props, None).unwrap();
///
/// assert_eq!(merged.common.get_f64("a"), Some(9.0));
/// assert_eq!(merged.self_tokens.get_f64("x"), Some(90.0));
/// ```
pub fn resolve_theme(
    resolve_id: &str,
    default_theme: &ThemeDefinition,
    props: &ThemeProps,
    provider: Option<&ConfigProvider>,
) -> Result<MergedTheme, ThemeError> {
    let instance_theme = props.theme.as_ref();
    let instance_overrides = props.theme_overrides.as_ref();

    let global_theme = provider.map(|p| &p.theme);
    let global_component = global_theme.and_then(|t| t.components.get(resolve_id));
    let global_overrides = provider.map(|p| &p.theme_overrides);
    let global_component_overrides =
        global_overrides.and_then(|o| o.components.get(resolve_id));

    let base_common = instance_theme
        .and_then(ThemeDefinition::common_tokens)
        .or_else(|| global_component.and_then(ThemeDefinition::common_tokens))
        .or_else(|| global_theme.and_then(|t| t.common.as_ref()))
        .or_else(|| default_theme.common_tokens())
        .ok_or_else(|| ThemeError::MissingCommon {
            component: resolve_id.to_string(),
        })?;

    let mut common = base_common.clone();
    if let Some(defaults) = default_theme.common_tokens() {
        common.underlay(defaults);
    }
    let common_layers = [
        global_overrides.and_then(|o| o.common.as_ref()),
        global_component_overrides.and_then(|o| o.common.as_ref()),
        instance_overrides.and_then(|o| o.common.as_ref()),
    ];
    for layer in common_layers.into_iter().flatten() {
        common.merge(layer);
    }

    let generator = instance_theme
        .and_then(ThemeDefinition::generator)
        .or_else(|| global_component.and_then(ThemeDefinition::generator))
        .or_else(|| default_theme.generator())
        .ok_or_else(|| ThemeError::MissingSelfGenerator {
            component: resolve_id.to_string(),
        })?;

    let mut self_tokens = generator(&common);
    let self_layers = [
        props.builtin_theme_overrides.as_ref(),
        global_component_overrides,
        instance_overrides,
    ];
    for layer in self_layers.into_iter().flatten() {
        self_tokens.merge(&layer.tokens);
    }

    let mut peers = default_theme.peers().clone();
    for layer in [global_component, instance_theme].into_iter().flatten() {
        merge_peer_themes(&mut peers, layer.peers());
    }

    let mut peer_overrides = BTreeMap::new();
    for layer in [global_component_overrides, instance_overrides]
        .into_iter()
        .flatten()
    {
        merge_peer_overrides(&mut peer_overrides, &layer.peers);
    }

    tracing::trace!(
        component = resolve_id,
        common = common.len(),
        self_tokens = self_tokens.len(),
        "resolved theme"
    );

    Ok(MergedTheme {
        common,
        self_tokens,
        peers,
        peer_overrides,
    })
}
