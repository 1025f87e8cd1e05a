//! Design token values and flat token maps.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single design value: a color, length, duration, easing curve or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl TokenValue {
    /// Returns the text value, if this token is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this token is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Bool(b) => write!(f, "{}", b),
            // CSS has no use for a trailing ".0"
            TokenValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        TokenValue::Number(f64::from(value))
    }
}

impl From<u32> for TokenValue {
    fn from(value: u32) -> Self {
        TokenValue::Number(f64::from(value))
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        TokenValue::Bool(value)
    }
}

/// A flat mapping from token name to value.
///
/// Merging is key-for-key: values from the applied map replace existing ones,
/// and keys are never removed.
///
/// # Example
///
/// ```rust
/// use livery::TokenMap;
///
/// let mut common = TokenMap::new()
///     .with("primaryColor", "#18a058")
///     .with("fontSize", "14px");
/// common.merge(&TokenMap::new().with("primaryColor", "#2080f0"));
///
/// assert_eq!(common.get_str("primaryColor"), Some("#2080f0"));
/// assert_eq!(common.get_str("fontSize"), Some("14px"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenMap {
    tokens: BTreeMap<String, TokenValue>,
}

impl TokenMap {
    /// Creates an empty token map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the updated map for chaining.
    pub fn with<V: Into<TokenValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces a token.
    pub fn insert<V: Into<TokenValue>>(&mut self, name: &str, value: V) {
        self.tokens.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(TokenValue::as_str)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(TokenValue::as_f64)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Applies `other` on top of this map, replacing values key-for-key.
    pub fn merge(&mut self, other: &TokenMap) {
        for (name, value) in &other.tokens {
            self.tokens.insert(name.clone(), value.clone());
        }
    }

    /// Adds every token of `base` that this map does not define yet.
    pub(crate) fn underlay(&mut self, base: &TokenMap) {
        for (name, value) in &base.tokens {
            self.tokens
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, TokenValue> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<K: Into<String>, V: Into<TokenValue>> FromIterator<(K, V)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = (&'a String, &'a TokenValue);
    type IntoIter = btree_map::Iter<'a, String, TokenValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(TokenValue::from(0).to_string(), "0");
        assert_eq!(TokenValue::from(90.0).to_string(), "90");
        assert_eq!(TokenValue::from(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_text_display_is_verbatim() {
        let value = TokenValue::from("cubic-bezier(.4, 0, .2, 1)");
        assert_eq!(value.to_string(), "cubic-bezier(.4, 0, .2, 1)");
    }

    #[test]
    fn test_merge_replaces_and_keeps() {
        let mut map = TokenMap::new().with("a", 1).with("b", 2);
        map.merge(&TokenMap::new().with("a", 9).with("c", "x"));
        assert_eq!(map.get_f64("a"), Some(9.0));
        assert_eq!(map.get_f64("b"), Some(2.0));
        assert_eq!(map.get_str("c"), Some("x"));
    }

    #[test]
    fn test_underlay_only_fills_gaps() {
        let mut map = TokenMap::new().with("a", 1);
        map.underlay(&TokenMap::new().with("a", 5).with("b", 2));
        assert_eq!(map.get_f64("a"), Some(1.0));
        assert_eq!(map.get_f64("b"), Some(2.0));
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let map: TokenMap =
            serde_json::from_str(r#"{"fontSize": "14px", "opacity": 0.5, "bordered": true, "zIndex": 3}"#)
                .unwrap();
        assert_eq!(map.get_str("fontSize"), Some("14px"));
        assert_eq!(map.get_f64("opacity"), Some(0.5));
        assert_eq!(map.get("bordered"), Some(&TokenValue::Bool(true)));
        assert_eq!(map.get_f64("zIndex"), Some(3.0));
    }

    proptest! {
        #[test]
        fn prop_merge_never_removes_keys(
            base in proptest::collection::btree_map("[a-z]{1,6}", 0i32..100, 0..12),
            over in proptest::collection::btree_map("[a-z]{1,6}", 0i32..100, 0..12),
        ) {
            let mut merged: TokenMap = base.clone().into_iter().collect();
            let overlay: TokenMap = over.clone().into_iter().collect();
            merged.merge(&overlay);

            for key in base.keys() {
                prop_assert!(merged.contains_key(key));
            }
            for (key, value) in &over {
                prop_assert_eq!(merged.get_f64(key), Some(f64::from(*value)));
            }
        }
    }
}
