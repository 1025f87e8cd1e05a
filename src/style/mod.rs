//! Style compilation and injection.
//!
//! - [`rule`]: rule trees built with [`c`], [`cb`], [`ce`], [`cm`] and [`RuleFactory`]
//! - [`render_css`]: pure rendering with class-prefix substitution
//! - [`mount`]: idempotent, process-wide registration by id
//! - [`GLOBAL_STYLE`] and [`ICON_SWITCH_TRANSITION`]: built-in sheets and fragments

mod global;
mod registry;
mod render;
pub mod rule;
mod transitions;

pub use global::{mount_global_style, GLOBAL_STYLE, GLOBAL_STYLE_ID};
pub use registry::{
    is_mounted, mount, mounted_count, mounted_style, mounted_styles, render_head, teardown,
    MountOptions, MountOutcome, MountedStyle,
};
pub use render::{render_css, MountProps};
pub use rule::{c, cb, ce, cm, CNode, Props, RuleBody, RuleFactory, SelectorList, PREFIX};
pub use transitions::{IconSwitchConfig, ICON_SWITCH_TRANSITION};
