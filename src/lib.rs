//! # Livery - theming and scoped styles for UI component libraries
//!
//! Livery is the runtime a component library uses to look the same
//! everywhere and still be re-skinnable per application and per instance.
//! It provides:
//!
//! - Theme resolution: library defaults, an application-wide provider and
//!   per-instance overrides deep-merged under a fixed precedence
//! - Rule trees: selectors, declaration blocks and nested rules, with
//!   parameterized fragments
//! - Idempotent mounting: one stylesheet per id for the life of the process,
//!   however many instances ask for it
//! - Token-derived CSS custom properties
//!
//! ## Core Concepts
//!
//! - [`ThemeDefinition`]: common tokens, a self-token generator and peer themes
//! - [`ThemeOverride`]: partial patches, loadable from YAML or JSON
//! - [`ConfigProvider`]: the optional ambient application configuration
//! - [`resolve_theme`]: computes a [`MergedTheme`]
//! - [`c`] / [`CNode`]: rule trees; [`mount`]: registration by id
//! - [`use_config`], [`use_theme`], [`use_style`]: component setup helpers
//! - [`create_key`]: variant token names such as `heightLarge`
//!
//! ## Quick Start
//!
//! ```rust
//! use livery::{
//!     cb, ce, create_key, resolve_theme, ConfigProvider, GlobalThemeOverrides, MountOptions,
//!     MountProps, Props, ThemeDefinition, ThemeOverride, ThemeProps, TokenMap,
//! };
//!
//! // A component family: common tokens plus self tokens derived from them.
//! let button_light = ThemeDefinition::new("Button")
//!     .common(TokenMap::new().with("primaryColor", "#18a058").with("heightMedium", "34px"))
//!     .self_tokens(|common| {
//!         TokenMap::new()
//!             .with("colorPrimary", common.get_str("primaryColor").unwrap_or(""))
//!             .with("heightMedium", common.get_str("heightMedium").unwrap_or(""))
//!     });
//!
//! // The application re-skins every button; one instance goes further.
//! let provider = ConfigProvider::new().theme_overrides(
//!     GlobalThemeOverrides::new().common(TokenMap::new().with("primaryColor", "#2080f0")),
//! );
//! let props = ThemeProps::new().theme_overrides(ThemeOverride::new().token("heightMedium", "40px"));
//!
//! let merged = resolve_theme("Button", &button_light, &props, Some(&provider)).unwrap();
//! assert_eq!(merged.self_tokens.get_str("colorPrimary"), Some("#2080f0"));
//! assert_eq!(
//!     merged.self_tokens.get_str(&create_key("height", "medium")),
//!     Some("40px")
//! );
//!
//! // Styles are scoped by class prefix and mounted once per id.
//! let style = cb("button", Props::new().set("display", "inline-flex"), [
//!     ce("icon", "margin: 0 4px;", []),
//! ]);
//! let options = MountOptions::new("quickstart-button").props(MountProps::for_cls_prefix("n"));
//! style.mount(&options).unwrap();
//! assert!(livery::mounted_style("quickstart-button").unwrap().css.contains(".n-button__icon"));
//! ```
//!
//! ## Logging
//!
//! Livery reports through [`tracing`]: stylesheet insertions at `debug`,
//! skipped duplicate mounts and theme resolutions at `trace`. Install any
//! subscriber to see them.

mod error;
pub mod hooks;
pub mod provider;
pub mod style;
pub mod theme;
mod util;
pub mod vars;

pub use error::{ConfigError, StyleError, ThemeError};
pub use hooks::{
    component_mount_options, use_config, use_style, use_theme, ConfigOptions, ConfigProps,
    MergedConfig, ProviderHandle, SetupContext, ThemeRef, DEFAULT_CLS_PREFIX,
};
pub use provider::{ConfigProvider, GlobalTheme, GlobalThemeOverrides, ProviderConfig};
pub use style::{
    c, cb, ce, cm, is_mounted, mount, mount_global_style, mounted_count, mounted_style,
    mounted_styles, render_css, render_head, teardown, CNode, IconSwitchConfig, MountOptions,
    MountOutcome, MountProps, MountedStyle, Props, RuleBody, RuleFactory, SelectorList,
    GLOBAL_STYLE, GLOBAL_STYLE_ID, ICON_SWITCH_TRANSITION, PREFIX,
};
pub use theme::{
    detect_color_mode, reset_theme_detector, resolve_theme, set_theme_detector, AdaptiveTheme,
    ColorMode, MergedTheme, SelfGenerator, ThemeChoice, ThemeDefinition, ThemeDetector,
    ThemeOverride, ThemeProps, TokenMap, TokenValue,
};
pub use util::{create_key, kebab_case};
pub use vars::CssVars;
