//! The baseline stylesheet shared by every component.

use once_cell::sync::Lazy;

use super::registry::{mount, MountOptions, MountOutcome};
use super::rule::{c, CNode};
use crate::error::StyleError;
use crate::theme::common::{FONT_FAMILY, FONT_SIZE, LINE_HEIGHT};

/// Registry id of the baseline stylesheet.
pub const GLOBAL_STYLE_ID: &str = "library/global";

/// The baseline rules: body font and form inputs inheriting it.
pub static GLOBAL_STYLE: Lazy<CNode> = Lazy::new(|| {
    c(
        "body",
        format!(
            "
            margin: 0;
            font-size: {FONT_SIZE};
            font-family: {FONT_FAMILY};
            line-height: {LINE_HEIGHT};
            -webkit-text-size-adjust: 100%;
            "
        ),
        [c(
            "input",
            "
            font-family: inherit;
            font-size: inherit;
            ",
            [],
        )],
    )
});

/// Mounts the baseline stylesheet; later calls are no-ops.
pub fn mount_global_style() -> Result<MountOutcome, StyleError> {
    mount(
        std::slice::from_ref(&*GLOBAL_STYLE),
        &MountOptions::new(GLOBAL_STYLE_ID),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::registry::{is_mounted, mounted_style};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_global_style_mounts_once() {
        mount_global_style().unwrap();
        assert!(is_mounted(GLOBAL_STYLE_ID));
        assert_eq!(mount_global_style().unwrap(), MountOutcome::AlreadyMounted);

        let css = mounted_style(GLOBAL_STYLE_ID).unwrap().css;
        assert!(css.starts_with("body {\n  margin: 0;\n  font-size: 14px;"));
        assert!(css.contains("body input {\n  font-family: inherit;\n  font-size: inherit;\n}"));
    }
}
