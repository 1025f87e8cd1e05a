//! The ambient configuration provider that components read from.
//!
//! A [`ConfigProvider`] is the nearest enclosing application-level
//! configuration: default class prefix, default bordered flag, a global theme
//! and global theme overrides. Every field is optional and components treat a
//! missing provider exactly like an empty one.
//!
//! The serializable part of a provider is described by [`ProviderConfig`] and
//! can be loaded from YAML or JSON:
//!
//! ```rust
//! use livery::{ConfigProvider, ProviderConfig};
//!
//! let config = ProviderConfig::from_yaml(r##"
//! cls_prefix: acme
//! bordered: false
//! theme_overrides:
//!   common:
//!     primaryColor: "#2080f0"
//!   Button:
//!     textColor: "#fff"
//! "##).unwrap();
//!
//! let provider = ConfigProvider::from_config(config);
//! assert_eq!(provider.cls_prefix.as_deref(), Some("acme"));
//! assert!(provider.theme_overrides.components.contains_key("Button"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::{merge_peer_themes, merge_peer_overrides, ThemeDefinition, ThemeOverride, TokenMap};

/// Application-wide theme definitions, keyed by component id.
#[derive(Debug, Clone, Default)]
pub struct GlobalTheme {
    /// Common tokens shared by every component.
    pub common: Option<TokenMap>,
    /// Per-component definitions, possibly partial.
    pub components: BTreeMap<String, ThemeDefinition>,
}

impl GlobalTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn common(mut self, common: TokenMap) -> Self {
        self.common = Some(common);
        self
    }

    pub fn component(mut self, id: &str, theme: ThemeDefinition) -> Self {
        self.components.insert(id.to_string(), theme);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.common.is_none() && self.components.is_empty()
    }
}

/// Application-wide theme overrides: `common` plus one entry per component id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalThemeOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<TokenMap>,
    #[serde(flatten)]
    pub components: BTreeMap<String, ThemeOverride>,
}

impl GlobalThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn common(mut self, common: TokenMap) -> Self {
        self.common = Some(common);
        self
    }

    pub fn component(mut self, id: &str, patch: ThemeOverride) -> Self {
        self.components.insert(id.to_string(), patch);
        self
    }

    /// Layers `other` on top of these overrides.
    pub fn merge(&mut self, other: &GlobalThemeOverrides) {
        if let Some(common) = &other.common {
            self.common.get_or_insert_with(TokenMap::new).merge(common);
        }
        merge_peer_overrides(&mut self.components, &other.components);
    }
}

/// The serializable subset of a provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cls_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bordered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub theme_overrides: GlobalThemeOverrides,
}

impl ProviderConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}

/// The ambient provider bridge.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    pub cls_prefix: Option<String>,
    pub bordered: Option<bool>,
    pub namespace: Option<String>,
    pub theme: GlobalTheme,
    pub theme_overrides: GlobalThemeOverrides,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ProviderConfig) -> Self {
        Self {
            cls_prefix: config.cls_prefix,
            bordered: config.bordered,
            namespace: config.namespace,
            theme: GlobalTheme::default(),
            theme_overrides: config.theme_overrides,
        }
    }

    pub fn cls_prefix(mut self, prefix: &str) -> Self {
        self.cls_prefix = Some(prefix.to_string());
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = Some(bordered);
        self
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(namespace.to_string());
        self
    }

    pub fn theme(mut self, theme: GlobalTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme_overrides(mut self, overrides: GlobalThemeOverrides) -> Self {
        self.theme_overrides = overrides;
        self
    }

    /// Places this provider inside `parent`.
    ///
    /// Unset scalar fields inherit from the parent. Theme overrides merge with
    /// this provider's entries winning. A provider without a global theme uses
    /// the parent's; otherwise the two merge per component.
    pub fn nested(mut self, parent: &ConfigProvider) -> Self {
        if self.cls_prefix.is_none() {
            self.cls_prefix = parent.cls_prefix.clone();
        }
        if self.bordered.is_none() {
            self.bordered = parent.bordered;
        }
        if self.namespace.is_none() {
            self.namespace = parent.namespace.clone();
        }

        let mut overrides = parent.theme_overrides.clone();
        overrides.merge(&self.theme_overrides);
        self.theme_overrides = overrides;

        if self.theme.is_empty() {
            self.theme = parent.theme.clone();
        } else {
            let mut theme = parent.theme.clone();
            if self.theme.common.is_some() {
                theme.common = self.theme.common.take();
            }
            merge_peer_themes(&mut theme.components, &self.theme.components);
            self.theme = theme;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_from_json() {
        let config = ProviderConfig::from_json(
            r##"{"cls_prefix": "x", "theme_overrides": {"common": {"fontSize": "16px"}, "Input": {"height": 40}}}"##,
        )
        .unwrap();
        assert_eq!(config.cls_prefix.as_deref(), Some("x"));
        assert_eq!(config.bordered, None);
        let overrides = &config.theme_overrides;
        assert_eq!(
            overrides.common.as_ref().and_then(|c| c.get_str("fontSize")),
            Some("16px")
        );
        assert_eq!(overrides.components["Input"].tokens.get_f64("height"), Some(40.0));
    }

    #[test]
    fn test_provider_config_empty_yaml() {
        let config = ProviderConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ProviderConfig::default());
    }

    #[test]
    fn test_provider_config_invalid_yaml() {
        let result = ProviderConfig::from_yaml("cls_prefix: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_nested_inherits_unset_fields() {
        let parent = ConfigProvider::new()
            .cls_prefix("outer")
            .bordered(false)
            .namespace("app");
        let child = ConfigProvider::new().cls_prefix("inner").nested(&parent);

        assert_eq!(child.cls_prefix.as_deref(), Some("inner"));
        assert_eq!(child.bordered, Some(false));
        assert_eq!(child.namespace.as_deref(), Some("app"));
    }

    #[test]
    fn test_nested_merges_overrides_child_wins() {
        let parent = ConfigProvider::new().theme_overrides(
            GlobalThemeOverrides::new()
                .common(TokenMap::new().with("a", 1).with("b", 1))
                .component("Button", ThemeOverride::new().token("x", 1).token("y", 1)),
        );
        let child = ConfigProvider::new()
            .theme_overrides(
                GlobalThemeOverrides::new()
                    .common(TokenMap::new().with("b", 2))
                    .component("Button", ThemeOverride::new().token("y", 2)),
            )
            .nested(&parent);

        let common = child.theme_overrides.common.as_ref().unwrap();
        assert_eq!(common.get_f64("a"), Some(1.0));
        assert_eq!(common.get_f64("b"), Some(2.0));
        let button = &child.theme_overrides.components["Button"].tokens;
        assert_eq!(button.get_f64("x"), Some(1.0));
        assert_eq!(button.get_f64("y"), Some(2.0));
    }

    #[test]
    fn test_nested_falls_back_to_parent_theme() {
        let parent = ConfigProvider::new()
            .theme(GlobalTheme::new().common(TokenMap::new().with("tone", "dark")));
        let child = ConfigProvider::new().nested(&parent);
        assert_eq!(
            child.theme.common.as_ref().and_then(|c| c.get_str("tone")),
            Some("dark")
        );
    }
}
