//! Theme definitions and layerable theme overrides.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::tokens::{TokenMap, TokenValue};

/// Derives a component's self tokens from resolved common tokens.
pub type SelfGenerator = Arc<dyn Fn(&TokenMap) -> TokenMap + Send + Sync>;

/// The theme of one component family.
///
/// A library ships one definition per component with both common tokens and
/// a self generator. Definitions supplied by a provider or by an instance may
/// be partial: any missing part falls through to the next layer.
///
/// # Example
///
/// ```rust
/// use livery::{ThemeDefinition, TokenMap};
///
/// let icon = ThemeDefinition::new("Icon")
///     .common(TokenMap::new().with("textColor2", "#333"))
///     .self_tokens(|common| {
///         TokenMap::new().with("color", common.get_str("textColor2").unwrap_or("#000"))
///     });
///
/// let button = ThemeDefinition::new("Button")
///     .common(TokenMap::new().with("primaryColor", "#18a058"))
///     .self_tokens(|common| TokenMap::new().with("colorPrimary", common.get_str("primaryColor").unwrap_or("")))
///     .peer("Icon", icon);
///
/// assert!(button.peers().contains_key("Icon"));
/// ```
#[derive(Clone, Default)]
pub struct ThemeDefinition {
    name: String,
    common: Option<TokenMap>,
    generator: Option<SelfGenerator>,
    peers: BTreeMap<String, ThemeDefinition>,
}

impl ThemeDefinition {
    /// Creates an empty definition with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Sets the common tokens, returning the updated definition for chaining.
    pub fn common(mut self, common: TokenMap) -> Self {
        self.common = Some(common);
        self
    }

    /// Sets the self token generator.
    pub fn self_tokens<F>(mut self, generator: F) -> Self
    where
        F: Fn(&TokenMap) -> TokenMap + Send + Sync + 'static,
    {
        self.generator = Some(Arc::new(generator));
        self
    }

    /// Adds the theme of a sub-component embedded in this one.
    pub fn peer(mut self, name: &str, theme: ThemeDefinition) -> Self {
        self.peers.insert(name.to_string(), theme);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn common_tokens(&self) -> Option<&TokenMap> {
        self.common.as_ref()
    }

    pub fn generator(&self) -> Option<&SelfGenerator> {
        self.generator.as_ref()
    }

    pub fn peers(&self) -> &BTreeMap<String, ThemeDefinition> {
        &self.peers
    }

    /// Layers `other` on top of this definition.
    ///
    /// Common tokens merge key-for-key, a generator in `other` replaces this
    /// one, and peers merge recursively by name.
    pub fn merge(&mut self, other: &ThemeDefinition) {
        if !other.name.is_empty() {
            self.name = other.name.clone();
        }
        if let Some(common) = &other.common {
            match &mut self.common {
                Some(existing) => existing.merge(common),
                None => self.common = Some(common.clone()),
            }
        }
        if let Some(generator) = &other.generator {
            self.generator = Some(Arc::clone(generator));
        }
        merge_peer_themes(&mut self.peers, &other.peers);
    }
}

impl fmt::Debug for ThemeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeDefinition")
            .field("name", &self.name)
            .field("common", &self.common)
            .field("generator", &self.generator.as_ref().map(|_| "<fn>"))
            .field("peers", &self.peers)
            .finish()
    }
}

/// Merges peer theme maps: `overlay` entries merge into same-named entries.
pub(crate) fn merge_peer_themes(
    target: &mut BTreeMap<String, ThemeDefinition>,
    overlay: &BTreeMap<String, ThemeDefinition>,
) {
    for (name, theme) in overlay {
        target
            .entry(name.clone())
            .and_modify(|existing| existing.merge(theme))
            .or_insert_with(|| theme.clone());
    }
}

/// A partial, layerable patch over a component's theme.
///
/// Self tokens live at the top level next to the optional `common` and
/// `peers` sections, so an override reads the same in code and in config:
///
/// ```yaml
/// common:
///   primaryColor: "#2080f0"
/// textColor: "#fff"
/// peers:
///   Icon:
///     color: "#fff"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub peers: BTreeMap<String, ThemeOverride>,
    #[serde(flatten)]
    pub tokens: TokenMap,
}

impl ThemeOverride {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides one self token.
    pub fn token<V: Into<TokenValue>>(mut self, name: &str, value: V) -> Self {
        self.tokens.insert(name, value);
        self
    }

    /// Overrides one common token.
    pub fn common_token<V: Into<TokenValue>>(mut self, name: &str, value: V) -> Self {
        self.common.get_or_insert_with(TokenMap::new).insert(name, value);
        self
    }

    /// Adds an override for a peer sub-component.
    pub fn peer(mut self, name: &str, peer: ThemeOverride) -> Self {
        self.peers.insert(name.to_string(), peer);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.common.is_none() && self.peers.is_empty() && self.tokens.is_empty()
    }

    /// Layers `other` on top of this override, recursing into peers.
    pub fn merge(&mut self, other: &ThemeOverride) {
        if let Some(common) = &other.common {
            self.common.get_or_insert_with(TokenMap::new).merge(common);
        }
        self.tokens.merge(&other.tokens);
        merge_peer_overrides(&mut self.peers, &other.peers);
    }
}

pub(crate) fn merge_peer_overrides(
    target: &mut BTreeMap<String, ThemeOverride>,
    overlay: &BTreeMap<String, ThemeOverride>,
) {
    for (name, patch) in overlay {
        target
            .entry(name.clone())
            .and_modify(|existing| existing.merge(patch))
            .or_insert_with(|| patch.clone());
    }
}
