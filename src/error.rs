//! Error types for theme resolution, style mounting and configuration.

use thiserror::Error;

/// Error returned when a theme cannot be resolved.
///
/// Both variants point at a broken component family definition rather than
/// a runtime condition, so callers usually surface them as bugs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// No layer supplied a self-token generator.
    #[error("theme for '{component}' has no self token generator")]
    MissingSelfGenerator { component: String },
    /// No layer supplied common tokens.
    #[error("theme for '{component}' has no common tokens")]
    MissingCommon { component: String },
}

/// Error returned when a stylesheet cannot be mounted.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A component asked to be styled without providing a compiled style.
    #[error("no style is specified for mount id '{mount_id}'")]
    MissingStyle { mount_id: String },
    /// `mount` was called with no rule roots.
    #[error("cannot mount '{id}': the rule tree is empty")]
    EmptyStyle { id: String },
    /// A selector or raw block failed to render.
    #[error("failed to render stylesheet: {0}")]
    Render(#[from] minijinja::Error),
}

/// Error returned when provider configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML provider config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON provider config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_self_generator_display() {
        let err = ThemeError::MissingSelfGenerator {
            component: "Button".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Button"));
        assert!(msg.contains("generator"));
    }

    #[test]
    fn test_missing_style_display() {
        let err = StyleError::MissingStyle {
            mount_id: "BaseIcon".to_string(),
        };
        assert_eq!(err.to_string(), "no style is specified for mount id 'BaseIcon'");
    }

    #[test]
    fn test_config_error_from_json() {
        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
