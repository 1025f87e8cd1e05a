//! Integration tests for theme resolution across provider and instance layers.

use livery::{
    resolve_theme, ConfigProvider, GlobalTheme, GlobalThemeOverrides, MergedTheme, ProviderConfig,
    ThemeDefinition, ThemeOverride, ThemeProps, TokenMap,
};
use proptest::prelude::*;

fn badge_theme() -> ThemeDefinition {
    ThemeDefinition::new("Badge")
        .common(TokenMap::new().with("a", 1).with("b", 2))
        .self_tokens(|c| TokenMap::new().with("x", c.get_f64("a").unwrap_or(0.0) * 10.0))
}

fn assert_same(left: &MergedTheme, right: &MergedTheme) {
    assert_eq!(left.common, right.common);
    assert_eq!(left.self_tokens, right.self_tokens);
    assert_eq!(
        left.peers.keys().collect::<Vec<_>>(),
        right.peers.keys().collect::<Vec<_>>()
    );
    assert_eq!(left.peer_overrides, right.peer_overrides);
}

#[test]
fn test_instance_common_beats_global_common() {
    let provider = ConfigProvider::new()
        .theme_overrides(GlobalThemeOverrides::new().common(TokenMap::new().with("a", 9)));
    let props = ThemeProps::new().theme_overrides(ThemeOverride::new().common_token("b", 9));

    let merged = resolve_theme("Badge", &badge_theme(), &props, Some(&provider)).unwrap();
    assert_eq!(merged.common, TokenMap::new().with("a", 9).with("b", 9));
}

#[test]
fn test_self_is_derived_from_overridden_common() {
    let provider = ConfigProvider::new()
        .theme_overrides(GlobalThemeOverrides::new().common(TokenMap::new().with("a", 9)));

    let merged =
        resolve_theme("Badge", &badge_theme(), &ThemeProps::new(), Some(&provider)).unwrap();
    assert_eq!(merged.self_tokens.get_f64("x"), Some(90.0));
}

#[test]
fn test_default_common_keys_survive_every_layer() {
    let provider = ConfigProvider::new()
        .theme(GlobalTheme::new().common(TokenMap::new().with("a", 5)))
        .theme_overrides(
            GlobalThemeOverrides::new()
                .common(TokenMap::new().with("c", 3))
                .component("Badge", ThemeOverride::new().common_token("a", 6)),
        );
    let props = ThemeProps::new()
        .theme(ThemeDefinition::new("Badge").common(TokenMap::new().with("d", 4)))
        .theme_overrides(ThemeOverride::new().common_token("e", 5));

    let merged = resolve_theme("Badge", &badge_theme(), &props, Some(&provider)).unwrap();
    for key in ["a", "b", "c", "d", "e"] {
        assert!(merged.common.contains_key(key), "missing {key}");
    }
    assert_eq!(merged.common.get_f64("a"), Some(6.0));
}

#[test]
fn test_absent_provider_equals_empty_provider() {
    let props = ThemeProps::new().theme_overrides(ThemeOverride::new().token("y", "z"));
    let absent = resolve_theme("Badge", &badge_theme(), &props, None).unwrap();
    let empty =
        resolve_theme("Badge", &badge_theme(), &props, Some(&ConfigProvider::new())).unwrap();
    assert_same(&absent, &empty);
}

#[test]
fn test_peer_theme_merge() {
    let default_theme = badge_theme().peer(
        "Icon",
        ThemeDefinition::new("Icon").common(TokenMap::new().with("s", 1)),
    );
    let props = ThemeProps::new().theme(ThemeDefinition::new("Badge").peer(
        "Icon",
        ThemeDefinition::new("Icon").common(TokenMap::new().with("s", 2)),
    ));

    let merged = resolve_theme("Badge", &default_theme, &props, None).unwrap();
    assert_eq!(
        merged.peers["Icon"].common_tokens().and_then(|c| c.get_f64("s")),
        Some(2.0)
    );
}

#[test]
fn test_peer_resolves_with_parent_overrides() {
    let icon_theme = ThemeDefinition::new("Icon")
        .common(TokenMap::new().with("textColor2", "#333"))
        .self_tokens(|c| TokenMap::new().with("color", c.get_str("textColor2").unwrap_or("")));
    let default_theme = badge_theme().peer("Icon", icon_theme.clone());

    let provider = ConfigProvider::new().theme_overrides(GlobalThemeOverrides::new().component(
        "Badge",
        ThemeOverride::new().peer("Icon", ThemeOverride::new().token("color", "#fff")),
    ));

    let parent = resolve_theme("Badge", &default_theme, &ThemeProps::new(), Some(&provider)).unwrap();
    let icon = resolve_theme("Icon", &icon_theme, &parent.peer_props("Icon"), Some(&provider)).unwrap();
    assert_eq!(icon.self_tokens.get_str("color"), Some("#fff"));
}

#[test]
fn test_provider_config_from_yaml_drives_resolution() {
    let config = ProviderConfig::from_yaml(
        r##"
cls_prefix: acme
theme_overrides:
  common:
    a: 3
  Badge:
    x: 1000
    common:
      b: 20
"##,
    )
    .unwrap();
    let provider = ConfigProvider::from_config(config);

    let merged =
        resolve_theme("Badge", &badge_theme(), &ThemeProps::new(), Some(&provider)).unwrap();
    assert_eq!(merged.common.get_f64("a"), Some(3.0));
    assert_eq!(merged.common.get_f64("b"), Some(20.0));
    assert_eq!(merged.self_tokens.get_f64("x"), Some(1000.0));
}

#[test]
fn test_nested_provider_resolution() {
    let outer = ConfigProvider::new()
        .theme_overrides(GlobalThemeOverrides::new().common(TokenMap::new().with("a", 2)));
    let inner = ConfigProvider::new()
        .theme_overrides(GlobalThemeOverrides::new().common(TokenMap::new().with("b", 7)))
        .nested(&outer);

    let merged = resolve_theme("Badge", &badge_theme(), &ThemeProps::new(), Some(&inner)).unwrap();
    assert_eq!(merged.common.get_f64("a"), Some(2.0));
    assert_eq!(merged.common.get_f64("b"), Some(7.0));
    assert_eq!(merged.self_tokens.get_f64("x"), Some(20.0));
}

proptest! {
    #[test]
    fn prop_instance_override_always_wins(global in 0i32..1000, instance in 0i32..1000) {
        let provider = ConfigProvider::new().theme_overrides(
            GlobalThemeOverrides::new()
                .common(TokenMap::new().with("a", global))
                .component("Badge", ThemeOverride::new().token("x", global)),
        );
        let props = ThemeProps::new().theme_overrides(
            ThemeOverride::new().common_token("a", instance).token("x", instance),
        );

        let merged = resolve_theme("Badge", &badge_theme(), &props, Some(&provider)).unwrap();
        prop_assert_eq!(merged.common.get_f64("a"), Some(f64::from(instance)));
        prop_assert_eq!(merged.self_tokens.get_f64("x"), Some(f64::from(instance)));
    }

    #[test]
    fn prop_empty_provider_is_transparent(a in -100i32..100, y in "[a-z]{0,8}") {
        let props = ThemeProps::new()
            .theme_overrides(ThemeOverride::new().common_token("a", a).token("y", y.as_str()));
        let absent = resolve_theme("Badge", &badge_theme(), &props, None).unwrap();
        let empty = resolve_theme("Badge", &badge_theme(), &props, Some(&ConfigProvider::new())).unwrap();
        prop_assert_eq!(absent.common, empty.common);
        prop_assert_eq!(absent.self_tokens, empty.self_tokens);
    }
}
