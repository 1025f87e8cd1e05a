//! Component-facing setup helpers.
//!
//! A component's setup receives a [`SetupContext`]: a handle on the nearest
//! enclosing [`ConfigProvider`] (if any) and a queue of before-mount hooks.
//! The helpers here read the provider and register style mounts on that
//! queue; the host renderer calls [`SetupContext::run_before_mount`] once,
//! before the component's first paint.
//!
//! ```rust
//! use std::sync::Arc;
//! use livery::{
//!     cb, is_mounted, use_config, use_theme, ConfigOptions, ConfigProps, ConfigProvider,
//!     SetupContext, ThemeDefinition, ThemeProps, TokenMap,
//! };
//!
//! let style = cb("tag", "display: inline-flex;", []);
//! let theme = ThemeDefinition::new("Tag")
//!     .common(TokenMap::new().with("primaryColor", "#18a058"))
//!     .self_tokens(|c| TokenMap::new().with("color", c.get_str("primaryColor").unwrap_or("")));
//!
//! let mut cx = SetupContext::with_provider(Arc::new(ConfigProvider::new().cls_prefix("doc")));
//! let config = use_config(&cx, &ConfigProps::default(), ConfigOptions::default());
//! let theme_ref = use_theme(&mut cx, "Tag", "-tag", Some(&style), &theme, Some(config.merged_cls_prefix.as_str()));
//!
//! cx.run_before_mount().unwrap();
//! assert!(is_mounted("doc-tag"));
//!
//! let merged = theme_ref.value(&ThemeProps::new()).unwrap();
//! assert_eq!(merged.self_tokens.get_str("color"), Some("#18a058"));
//! ```

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{StyleError, ThemeError};
use crate::provider::ConfigProvider;
use crate::style::{mount_global_style, CNode, MountOptions, MountProps};
use crate::theme::{resolve_theme, MergedTheme, ThemeChoice, ThemeDefinition, ThemeProps};

/// Class prefix used when neither the instance nor a provider sets one.
pub const DEFAULT_CLS_PREFIX: &str = "n";

type BeforeMountHook = Box<dyn FnOnce() -> Result<(), StyleError> + Send>;

/// A shared, replaceable slot holding the ambient provider.
///
/// The host keeps one handle per provider scope and hands clones to every
/// [`SetupContext`] inside it. Replacing the provider through [`set`](Self::set)
/// is seen by every [`ThemeRef`] created from those contexts on its next
/// [`ThemeRef::value`] call.
///
/// ```rust
/// use std::sync::Arc;
/// use livery::{ConfigProvider, ProviderHandle};
///
/// let handle = ProviderHandle::new(Some(Arc::new(ConfigProvider::new().cls_prefix("a"))));
/// let shared = handle.clone();
/// handle.set(Some(Arc::new(ConfigProvider::new().cls_prefix("b"))));
/// assert_eq!(shared.get().and_then(|p| p.cls_prefix.clone()).as_deref(), Some("b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProviderHandle {
    slot: Arc<RwLock<Option<Arc<ConfigProvider>>>>,
}

impl ProviderHandle {
    pub fn new(provider: Option<Arc<ConfigProvider>>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(provider)),
        }
    }

    /// Returns the current provider.
    pub fn get(&self) -> Option<Arc<ConfigProvider>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the provider for every holder of this handle.
    pub fn set(&self, provider: Option<Arc<ConfigProvider>>) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = provider;
        tracing::debug!(present = slot.is_some(), "ambient provider replaced");
    }
}

/// Per-instance setup state.
#[derive(Default)]
pub struct SetupContext {
    provider: ProviderHandle,
    before_mount: Vec<BeforeMountHook>,
}

impl SetupContext {
    /// A context with no enclosing provider.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(provider: Arc<ConfigProvider>) -> Self {
        Self::with_provider_handle(ProviderHandle::new(Some(provider)))
    }

    /// A context reading its provider from a handle shared with the host.
    pub fn with_provider_handle(provider: ProviderHandle) -> Self {
        Self {
            provider,
            before_mount: Vec::new(),
        }
    }

    /// The provider as it is right now.
    pub fn provider(&self) -> Option<Arc<ConfigProvider>> {
        self.provider.get()
    }

    pub fn provider_handle(&self) -> &ProviderHandle {
        &self.provider
    }

    /// Queues work to run before the first paint.
    pub fn on_before_mount<F>(&mut self, hook: F)
    where
        F: FnOnce() -> Result<(), StyleError> + Send + 'static,
    {
        self.before_mount.push(Box::new(hook));
    }

    /// Runs queued before-mount hooks in registration order.
    ///
    /// Hooks are consumed, so calling this again runs nothing. Every hook
    /// runs even when an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns the first hook error, e.g. a stylesheet that failed to render.
    /// Otherwise returns the number of hooks run.
    pub fn run_before_mount(&mut self) -> Result<usize, StyleError> {
        let hooks = std::mem::take(&mut self.before_mount);
        let count = hooks.len();
        let mut first_error = None;
        for hook in hooks {
            if let Err(err) = hook() {
                tracing::error!(error = %err, "before-mount hook failed");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(count),
        }
    }
}

impl fmt::Debug for SetupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetupContext")
            .field("provider", &self.provider)
            .field("before_mount", &self.before_mount.len())
            .finish()
    }
}

/// Per-instance configuration props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigProps {
    pub bordered: Option<bool>,
    pub cls_prefix: Option<String>,
}

/// Component-level defaults for [`use_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOptions {
    pub default_bordered: Option<bool>,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            default_bordered: Some(true),
        }
    }
}

/// Configuration merged from instance props, provider and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub merged_bordered: bool,
    pub merged_cls_prefix: String,
    pub namespace: Option<String>,
}

/// Merges instance config props with the ambient provider.
///
/// - bordered: instance, then provider, then `options.default_bordered`, then `true`
/// - class prefix: instance, then provider, then [`DEFAULT_CLS_PREFIX`]; empty
///   strings count as unset
pub fn use_config(cx: &SetupContext, props: &ConfigProps, options: ConfigOptions) -> MergedConfig {
    let provider = cx.provider();
    let provider = provider.as_deref();

    let merged_bordered = props
        .bordered
        .or_else(|| provider.and_then(|p| p.bordered))
        .or(options.default_bordered)
        .unwrap_or(true);

    let merged_cls_prefix = props
        .cls_prefix
        .as_deref()
        .filter(|p| !p.is_empty())
        .or_else(|| {
            provider
                .and_then(|p| p.cls_prefix.as_deref())
                .filter(|p| !p.is_empty())
        })
        .unwrap_or(DEFAULT_CLS_PREFIX)
        .to_string();

    MergedConfig {
        merged_bordered,
        merged_cls_prefix,
        namespace: provider.and_then(|p| p.namespace.clone()),
    }
}

/// A handle that resolves a component's merged theme on demand.
///
/// Nothing is cached: every [`ThemeRef::value`] call reflects the props it is
/// given and the provider currently held by the context's [`ProviderHandle`].
#[derive(Debug, Clone)]
pub struct ThemeRef {
    resolve_id: String,
    default_theme: ThemeDefinition,
    provider: ProviderHandle,
}

impl ThemeRef {
    pub fn resolve_id(&self) -> &str {
        &self.resolve_id
    }

    /// Resolves the merged theme for the current props and provider.
    pub fn value(&self, props: &ThemeProps) -> Result<MergedTheme, ThemeError> {
        let provider = self.provider.get();
        resolve_theme(
            &self.resolve_id,
            &self.default_theme,
            props,
            provider.as_deref(),
        )
    }
}

/// Sets up theming for a component.
///
/// When `style` is given, its mount (and the global baseline's) is queued on
/// the context's before-mount hooks. The returned [`ThemeRef`] shares the
/// context's provider handle, so it follows provider replacements. An
/// adaptive default is settled to its light or dark definition here, at setup.
pub fn use_theme<'a>(
    cx: &mut SetupContext,
    resolve_id: &str,
    mount_id: &str,
    style: Option<&CNode>,
    default_theme: impl Into<ThemeChoice<'a>>,
    cls_prefix: Option<&str>,
) -> ThemeRef {
    if let Some(style) = style {
        queue_mount(cx, mount_id, style.clone(), cls_prefix);
    }

    ThemeRef {
        resolve_id: resolve_id.to_string(),
        default_theme: default_theme.into().resolve().clone(),
        provider: cx.provider.clone(),
    }
}

/// Sets up styling without theming.
///
/// # Errors
///
/// A missing `style` is a wiring bug: debug builds return
/// [`StyleError::MissingStyle`]; release builds log a warning and skip.
/// Render failures of a given style surface from
/// [`SetupContext::run_before_mount`].
pub fn use_style(
    cx: &mut SetupContext,
    mount_id: &str,
    style: Option<&CNode>,
    cls_prefix: Option<&str>,
) -> Result<(), StyleError> {
    let Some(style) = style else {
        if cfg!(debug_assertions) {
            return Err(StyleError::MissingStyle {
                mount_id: mount_id.to_string(),
            });
        }
        tracing::warn!(mount_id, "no style is specified, skipping mount");
        return Ok(());
    };

    queue_mount(cx, mount_id, style.clone(), cls_prefix);
    Ok(())
}

/// Builds the mount options for a component stylesheet: the id is
/// `prefix + mount_id` and block selectors are scoped under `.prefix-`.
pub fn component_mount_options(mount_id: &str, cls_prefix: Option<&str>) -> MountOptions {
    let id = match cls_prefix {
        Some(prefix) => format!("{prefix}{mount_id}"),
        None => mount_id.to_string(),
    };
    let props = match cls_prefix {
        Some(prefix) if !prefix.is_empty() => MountProps::for_cls_prefix(prefix),
        _ => MountProps::default(),
    };
    MountOptions::new(&id).props(props)
}

fn queue_mount(cx: &mut SetupContext, mount_id: &str, style: CNode, cls_prefix: Option<&str>) {
    let options = component_mount_options(mount_id, cls_prefix);
    cx.on_before_mount(move || {
        let mounted = style.mount(&options);
        mount_global_style()?;
        mounted.map(|_| ())
    });
}
