//! Utility functions for token names and CSS property names.

/// Builds a size- or variant-specific token name from a base name.
///
/// A `"default"` suffix yields the base name unchanged. Any other suffix is
/// appended with its first character upper-cased when it is a lowercase ASCII
/// letter; the rest of the suffix is left as is.
///
/// # Example
///
/// ```rust
/// use livery::create_key;
///
/// assert_eq!(create_key("height", "large"), "heightLarge");
/// assert_eq!(create_key("color", "default"), "color");
/// assert_eq!(create_key("textColorTextDepth", "2"), "textColorTextDepth2");
/// ```
pub fn create_key(base: &str, suffix: &str) -> String {
    if suffix == "default" {
        return base.to_string();
    }

    let mut key = String::with_capacity(base.len() + suffix.len());
    key.push_str(base);

    let mut chars = suffix.chars();
    if let Some(first) = chars.next() {
        if first.is_ascii_lowercase() {
            key.push(first.to_ascii_uppercase());
        } else {
            key.push(first);
        }
        key.push_str(chars.as_str());
    }
    key
}

/// Converts a camelCase property name to its kebab-case CSS form.
///
/// Names that are already kebab-case pass through unchanged, as do custom
/// properties (`--name`). A leading capital produces a vendor prefix.
///
/// # Example
///
/// ```rust
/// use livery::kebab_case;
///
/// assert_eq!(kebab_case("transformOrigin"), "transform-origin");
/// assert_eq!(kebab_case("WebkitTextSizeAdjust"), "-webkit-text-size-adjust");
/// assert_eq!(kebab_case("font-size"), "font-size");
/// ```
pub fn kebab_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_create_key_default_is_elided() {
        assert_eq!(create_key("color", "default"), "color");
    }

    #[test]
    fn test_create_key_capitalizes_first_char() {
        assert_eq!(create_key("border", "primary"), "borderPrimary");
        assert_eq!(create_key("height", "large"), "heightLarge");
    }

    #[test]
    fn test_create_key_leaves_rest_of_suffix() {
        assert_eq!(create_key("textColor", "Hover"), "textColorHover");
        assert_eq!(create_key("textColor", "hoverPrimary"), "textColorHoverPrimary");
        assert_eq!(create_key("depth", "3"), "depth3");
    }

    #[test]
    fn test_create_key_empty_suffix() {
        assert_eq!(create_key("color", ""), "color");
    }

    #[test]
    fn test_kebab_case_camel() {
        assert_eq!(kebab_case("transformOrigin"), "transform-origin");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_kebab_case_vendor_prefix() {
        assert_eq!(kebab_case("WebkitTextSizeAdjust"), "-webkit-text-size-adjust");
    }

    #[test]
    fn test_kebab_case_passthrough() {
        assert_eq!(kebab_case("margin"), "margin");
        assert_eq!(kebab_case("font-family"), "font-family");
        assert_eq!(kebab_case("--ripple-color"), "--ripple-color");
        assert_eq!(kebab_case("--rippleColor"), "--rippleColor");
    }

    proptest! {
        #[test]
        fn prop_create_key_keeps_base_prefix(base in "[a-z][a-zA-Z]{0,12}", suffix in "[a-zA-Z0-9]{1,12}") {
            let key = create_key(&base, &suffix);
            prop_assert!(key.starts_with(&base));
            if suffix != "default" {
                prop_assert_eq!(key.len(), base.len() + suffix.len());
                prop_assert_eq!(&key[base.len() + 1..], &suffix[1..]);
            }
        }

        #[test]
        fn prop_kebab_case_has_no_uppercase(name in "[a-zA-Z]{1,24}") {
            let kebab = kebab_case(&name);
            prop_assert!(!kebab.chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
