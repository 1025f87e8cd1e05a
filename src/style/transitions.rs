//! Parameterized transition fragments.

use super::rule::{c, CNode, Props, RuleFactory};
use crate::theme::common::{CUBIC_BEZIER_EASE_IN_OUT, TRANSFORM_DEBOUNCE_SCALE};
use crate::theme::TokenValue;

/// Config of [`ICON_SWITCH_TRANSITION`].
#[derive(Debug, Clone, PartialEq)]
pub struct IconSwitchConfig {
    /// Transform of the icon at rest, kept while scaling.
    pub original_transform: String,
    pub left: TokenValue,
    pub top: TokenValue,
    pub transition: String,
}

impl Default for IconSwitchConfig {
    fn default() -> Self {
        Self {
            original_transform: String::new(),
            left: TokenValue::from(0),
            top: TokenValue::from(0),
            transition: format!("all .3s {CUBIC_BEZIER_EASE_IN_OUT} !important"),
        }
    }
}

/// Scale-and-fade swap between two icons sharing one slot.
///
/// Nest the output under the icon container's rule so `&` resolves to it.
pub const ICON_SWITCH_TRANSITION: RuleFactory<IconSwitchConfig> = RuleFactory::new(icon_switch);

fn icon_switch(config: &IconSwitchConfig) -> Vec<CNode> {
    let IconSwitchConfig {
        original_transform,
        left,
        top,
        transition,
    } = config;

    vec![
        c(
            "&.icon-switch-transition-enter-from, &.icon-switch-transition-leave-to",
            Props::new()
                .set("transform", format!("{original_transform} scale(0.75)"))
                .set("left", left.clone())
                .set("top", top.clone())
                .set("opacity", 0),
            [],
        ),
        c(
            "&.icon-switch-transition-enter-to, &.icon-switch-transition-leave-from",
            Props::new()
                .set("transform", format!("{TRANSFORM_DEBOUNCE_SCALE} {original_transform}"))
                .set("left", left.clone())
                .set("top", top.clone())
                .set("opacity", 1),
            [],
        ),
        c(
            "&.icon-switch-transition-enter-active, &.icon-switch-transition-leave-active",
            Props::new()
                .set("transformOrigin", "center")
                .set("position", "absolute")
                .set("left", left.clone())
                .set("top", top.clone())
                .set("transition", transition.as_str()),
            [],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::render::{render_css, MountProps};
    use crate::style::rule::cb;

    fn render(config: &IconSwitchConfig) -> String {
        let tree = cb("icon-slot", (), ICON_SWITCH_TRANSITION.instantiate(config));
        render_css(&[tree], &MountProps::for_cls_prefix("n")).unwrap()
    }

    #[test]
    fn test_default_config() {
        let css = render(&IconSwitchConfig::default());
        assert!(css.contains(".n-icon-slot.icon-switch-transition-enter-from,\n.n-icon-slot.icon-switch-transition-leave-to {"));
        assert!(css.contains("transform:  scale(0.75);"));
        assert!(css.contains("left: 0;"));
        assert!(css.contains("transform-origin: center;"));
        assert!(css.contains("transition: all .3s cubic-bezier(.4, 0, .2, 1) !important;"));
    }

    #[test]
    fn test_instances_differ_only_in_config_fields() {
        let a = ICON_SWITCH_TRANSITION.instantiate_default();
        let b = ICON_SWITCH_TRANSITION.instantiate(&IconSwitchConfig {
            original_transform: "translateX(-50%)".to_string(),
            left: TokenValue::from("50%"),
            ..IconSwitchConfig::default()
        });

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.selectors(), y.selectors());
        }
        assert_ne!(a[0].body(), b[0].body());

        let css = render(&IconSwitchConfig {
            original_transform: "translateX(-50%)".to_string(),
            left: TokenValue::from("50%"),
            ..IconSwitchConfig::default()
        });
        assert!(css.contains("transform: translateX(-50%) scale(0.75);"));
        assert!(css.contains("transform: scale(1) translateX(-50%);"));
        assert!(css.contains("left: 50%;"));
    }
}
