//! Viewer restyling.

use pdfview_common::protocol::ThemeColors;
use pdfview_common::ViewerError;

use crate::capabilities::ViewerCapabilities;

/// Id of the single theme style block.
pub const THEME_STYLE_ID: &str = "pdfview-theme";
pub const OVERRIDES_STYLE_ID: &str = "pdfview-overrides";

/// Layout fixes for a toolbar-less, embedded viewer.
pub const VIEWER_CSS_OVERRIDES: &str = "\
#toolbarContainer { display: none; }
#viewerContainer { top: 0; }
#sidebarContainer { top: 0; }
#secondaryToolbar, #findbar { display: none; }
";

/// Stylesheet for `colors`. Callers validate the colors first.
pub fn stylesheet(colors: &ThemeColors) -> String {
    format!(
        "\
.outlineItemToggler.outlineItemsHidden::after {{ background-color: {icons}; }}
.outlineItemToggler::after {{ background-color: {icons}; }}
.outlineItem > a {{ color: {foreground}; }}
#toolbarSidebar {{ background-color: {background}; }}
.page, .thumbnailImage {{ filter: invert({invert}%); }}
",
        icons = colors.icons,
        foreground = colors.foreground,
        background = colors.background,
        invert = colors.document_color_invert_intensity,
    )
}

/// Validate and apply a theme. The style block is replaced, never stacked.
pub fn apply_theme<V: ViewerCapabilities + ?Sized>(
    viewer: &mut V,
    colors: &ThemeColors,
) -> Result<(), ViewerError> {
    colors.validate()?;
    viewer.set_container_background(&colors.background);
    viewer.upsert_style(THEME_STYLE_ID, &stylesheet(colors));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_sidebar_and_pages() {
        let css = stylesheet(&ThemeColors {
            background: "#000".into(),
            foreground: "#fff".into(),
            icons: "#abc".into(),
            document_color_invert_intensity: 100,
        });
        assert!(css.contains(".page, .thumbnailImage { filter: invert(100%); }"));
        assert!(css.contains("#toolbarSidebar { background-color: #000; }"));
        assert!(css.contains(".outlineItem > a { color: #fff; }"));
        assert_eq!(css.matches("background-color: #abc").count(), 2);
    }
}
