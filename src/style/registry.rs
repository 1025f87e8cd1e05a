//! Process-wide stylesheet registry and idempotent mounting.
//!
//! Every component instance asks for its stylesheet on setup, so the same
//! mount id arrives many times. The registry guarantees at most one
//! stylesheet per id for the life of the process.
//!
//! # Design
//!
//! The registry is a single `Mutex` guarding both the set of mounted ids and
//! the ordered list of stylesheets. Mounting holds the lock across
//! check, render, insert and mark, so concurrent or re-entrant mounts of one
//! id cannot both insert.
//!
//! The stylesheet list stands in for the document: the rendering layer reads
//! it through [`mounted_styles`] or [`render_head`] and writes the tags it
//! finds into the page.
//!
//! # Example
//!
//! ```rust
//! use livery::{c, mount, is_mounted, MountOptions, MountOutcome};
//!
//! let style = c("body", "margin: 0;", []);
//! let options = MountOptions::new("doc-example/body");
//!
//! assert_eq!(mount(&[style.clone()], &options).unwrap(), MountOutcome::Inserted);
//! assert_eq!(mount(&[style], &options).unwrap(), MountOutcome::AlreadyMounted);
//! assert!(is_mounted("doc-example/body"));
//! ```

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use super::render::{render_css, MountProps};
use super::rule::CNode;
use crate::error::StyleError;

/// Where and how to mount a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountOptions {
    /// Registry key; one stylesheet per id.
    pub id: String,
    /// Place the stylesheet in the document head rather than an alternate target.
    pub head: bool,
    pub props: MountProps,
}

impl MountOptions {
    /// Head-placed options with no substitutions.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            head: true,
            props: MountProps::default(),
        }
    }

    pub fn head(mut self, head: bool) -> Self {
        self.head = head;
        self
    }

    pub fn props(mut self, props: MountProps) -> Self {
        self.props = props;
        self
    }
}

/// What a call to [`mount`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    Inserted,
    AlreadyMounted,
}

/// A stylesheet present in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedStyle {
    pub id: String,
    pub head: bool,
    pub css: String,
}

#[derive(Debug, Default)]
struct MountRegistry {
    ids: HashSet<String>,
    sheets: Vec<MountedStyle>,
}

static REGISTRY: Lazy<Mutex<MountRegistry>> = Lazy::new(|| Mutex::new(MountRegistry::default()));

fn registry() -> MutexGuard<'static, MountRegistry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mounts a rule tree under `options.id`, once per process.
///
/// If the id is already registered this returns
/// [`MountOutcome::AlreadyMounted`] without rendering anything.
///
/// # Errors
///
/// - [`StyleError::EmptyStyle`] if `roots` is empty
/// - [`StyleError::Render`] if a selector or raw block fails to render; the
///   id stays unregistered
pub fn mount(roots: &[CNode], options: &MountOptions) -> Result<MountOutcome, StyleError> {
    if roots.is_empty() {
        return Err(StyleError::EmptyStyle {
            id: options.id.clone(),
        });
    }

    let mut registry = registry();
    if registry.ids.contains(&options.id) {
        tracing::trace!(id = %options.id, "stylesheet already mounted");
        return Ok(MountOutcome::AlreadyMounted);
    }

    let css = render_css(roots, &options.props)?;
    tracing::debug!(id = %options.id, head = options.head, bytes = css.len(), "mounting stylesheet");

    registry.sheets.push(MountedStyle {
        id: options.id.clone(),
        head: options.head,
        css,
    });
    registry.ids.insert(options.id.clone());
    Ok(MountOutcome::Inserted)
}

impl CNode {
    /// Mounts this rule as the sole root of a stylesheet.
    pub fn mount(&self, options: &MountOptions) -> Result<MountOutcome, StyleError> {
        mount(std::slice::from_ref(self), options)
    }
}

pub fn is_mounted(id: &str) -> bool {
    registry().ids.contains(id)
}

/// Returns the stylesheet mounted under `id`.
pub fn mounted_style(id: &str) -> Option<MountedStyle> {
    registry().sheets.iter().find(|s| s.id == id).cloned()
}

/// Returns every mounted stylesheet in insertion order.
pub fn mounted_styles() -> Vec<MountedStyle> {
    registry().sheets.clone()
}

pub fn mounted_count() -> usize {
    registry().sheets.len()
}

/// Renders head-placed stylesheets as `<style>` tags, in insertion order.
pub fn render_head() -> String {
    registry()
        .sheets
        .iter()
        .filter(|s| s.head)
        .map(|s| format!("<style cssr-id=\"{}\">\n{}</style>\n", s.id, s.css))
        .collect()
}

/// Clears the registry. Only for full process teardown: components that
/// mounted earlier will not mount again on their own.
pub fn teardown() {
    let mut registry = registry();
    tracing::debug!(count = registry.sheets.len(), "tearing down stylesheet registry");
    registry.ids.clear();
    registry.sheets.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::rule::{c, cb};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_mount_is_idempotent() {
        let style = c("a", "b: c;", []);
        let options = MountOptions::new("registry-test/idempotent");

        assert_eq!(style.mount(&options).unwrap(), MountOutcome::Inserted);
        let count = mounted_count();
        let css = mounted_style("registry-test/idempotent").unwrap().css;

        for _ in 0..5 {
            assert_eq!(style.mount(&options).unwrap(), MountOutcome::AlreadyMounted);
        }
        assert_eq!(mounted_count(), count);
        assert_eq!(mounted_style("registry-test/idempotent").unwrap().css, css);
    }

    #[test]
    #[serial]
    fn test_second_mount_does_not_rerender() {
        let options = MountOptions::new("registry-test/first-wins");
        c("a", "x: 1;", []).mount(&options).unwrap();
        c("a", "x: 2;", []).mount(&options).unwrap();

        let css = mounted_style("registry-test/first-wins").unwrap().css;
        assert!(css.contains("x: 1;"));
        assert!(!css.contains("x: 2;"));
    }

    #[test]
    #[serial]
    fn test_mount_applies_prefix() {
        let options = MountOptions::new("registry-test/prefixed").props(MountProps::for_cls_prefix("acme"));
        cb("tag", "a: b;", []).mount(&options).unwrap();
        let css = mounted_style("registry-test/prefixed").unwrap().css;
        assert!(css.starts_with(".acme-tag {"));
    }

    #[test]
    fn test_mount_empty_roots_is_error() {
        let result = mount(&[], &MountOptions::new("registry-test/empty"));
        assert!(matches!(result, Err(StyleError::EmptyStyle { .. })));
    }

    #[test]
    #[serial]
    fn test_failed_render_leaves_id_unregistered() {
        let options = MountOptions::new("registry-test/broken");
        assert!(c("{{ oops", "a: b;", []).mount(&options).is_err());
        assert!(!is_mounted("registry-test/broken"));
    }

    #[test]
    #[serial]
    fn test_render_head_skips_non_head_sheets() {
        c("a", "b: c;", [])
            .mount(&MountOptions::new("registry-test/head"))
            .unwrap();
        c("a", "b: c;", [])
            .mount(&MountOptions::new("registry-test/body").head(false))
            .unwrap();

        let head = render_head();
        assert!(head.contains("cssr-id=\"registry-test/head\""));
        assert!(!head.contains("cssr-id=\"registry-test/body\""));
    }

    #[test]
    #[serial]
    fn test_teardown_clears_registry() {
        c("a", "b: c;", [])
            .mount(&MountOptions::new("registry-test/teardown"))
            .unwrap();
        teardown();
        assert_eq!(mounted_count(), 0);
        assert!(!is_mounted("registry-test/teardown"));
    }
}
