//! Built-in common tokens shared by every component family.

use once_cell::sync::Lazy;

use super::tokens::TokenMap;

pub const CUBIC_BEZIER_EASE_IN_OUT: &str = "cubic-bezier(.4, 0, .2, 1)";
pub const CUBIC_BEZIER_EASE_OUT: &str = "cubic-bezier(0, 0, .2, 1)";
pub const CUBIC_BEZIER_EASE_IN: &str = "cubic-bezier(.4, 0, 1, 1)";
pub const FONT_FAMILY: &str = "v-sans, system-ui, -apple-system, BlinkMacSystemFont, \"Segoe UI\", sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\"";
pub const FONT_SIZE: &str = "14px";
pub const LINE_HEIGHT: &str = "1.6";
pub const TRANSFORM_DEBOUNCE_SCALE: &str = "scale(1)";

/// Variables that do not depend on light or dark mode.
pub static COMMON_VARS: Lazy<TokenMap> = Lazy::new(|| {
    TokenMap::new()
        .with("cubicBezierEaseInOut", CUBIC_BEZIER_EASE_IN_OUT)
        .with("cubicBezierEaseOut", CUBIC_BEZIER_EASE_OUT)
        .with("cubicBezierEaseIn", CUBIC_BEZIER_EASE_IN)
        .with("fontFamily", FONT_FAMILY)
        .with("fontFamilyMono", "v-mono, SFMono-Regular, Menlo, Consolas, Courier, monospace")
        .with("fontSize", FONT_SIZE)
        .with("fontSizeSmall", "14px")
        .with("fontSizeMedium", "14px")
        .with("fontSizeLarge", "15px")
        .with("heightSmall", "28px")
        .with("heightMedium", "34px")
        .with("heightLarge", "40px")
        .with("borderRadius", "3px")
        .with("lineHeight", LINE_HEIGHT)
        .with("transformDebounceScale", TRANSFORM_DEBOUNCE_SCALE)
});

/// Common tokens of the light palette.
pub fn light_common() -> TokenMap {
    let mut common = COMMON_VARS.clone();
    common.merge(
        &TokenMap::new()
            .with("primaryColor", "#18a058")
            .with("primaryColorHover", "#36ad6a")
            .with("primaryColorPressed", "#0c7a43")
            .with("textColorBase", "#000")
            .with("textColor1", "rgb(31, 34, 37)")
            .with("textColor2", "rgb(51, 54, 57)")
            .with("textColorDisabled", "rgba(194, 194, 194, 1)")
            .with("borderColor", "rgb(224, 224, 230)")
            .with("baseColor", "#FFF")
            .with("opacityDisabled", 0.5),
    );
    common
}

/// Common tokens of the dark palette.
pub fn dark_common() -> TokenMap {
    let mut common = COMMON_VARS.clone();
    common.merge(
        &TokenMap::new()
            .with("primaryColor", "#63e2b7")
            .with("primaryColorHover", "#7fe7c4")
            .with("primaryColorPressed", "#5acea7")
            .with("textColorBase", "#fff")
            .with("textColor1", "rgba(255, 255, 255, 0.9)")
            .with("textColor2", "rgba(255, 255, 255, 0.82)")
            .with("textColorDisabled", "rgba(255, 255, 255, 0.38)")
            .with("borderColor", "rgba(255, 255, 255, 0.24)")
            .with("baseColor", "#000")
            .with("opacityDisabled", 0.38),
    );
    common
}
