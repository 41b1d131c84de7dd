//! Typed payloads carried by the event catalogs.

use serde::{Deserialize, Serialize};

use crate::errors::CssError;
use crate::sanitize::{validate_css_color, validate_invert_intensity};

/// Colors the host pushes so the viewer blends with the surrounding UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: String,
    pub foreground: String,
    pub icons: String,
    /// Percentage passed to the CSS `invert()` filter on page surfaces.
    pub document_color_invert_intensity: u8,
}

impl ThemeColors {
    /// Reject colors that could escape the generated style block.
    pub fn validate(&self) -> Result<(), CssError> {
        validate_css_color(&self.background)?;
        validate_css_color(&self.foreground)?;
        validate_css_color(&self.icons)?;
        validate_invert_intensity(self.document_color_invert_intensity)
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".into(),
            foreground: "#000000".into(),
            icons: "#6e6e6e".into(),
            document_color_invert_intensity: 0,
        }
    }
}

/// Highlight region produced by a SyncTeX forward search.
///
/// Coordinates are in PDF points (1/72 inch) relative to the page origin;
/// `y` is the baseline, so the box spans `y - height ..= y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardSearchTarget {
    /// 1-based page number.
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Click location reported for reverse search, in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPoint {
    pub page: u32,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SidebarViewMode {
    #[default]
    Thumbnails,
    Bookmarks,
    Attachments,
}

/// Which sidebar view is selected and whether the sidebar is collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarViewState {
    pub mode: SidebarViewMode,
    pub hidden: bool,
}

/// Sidebar views the current document can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailableViews {
    pub thumbnails: bool,
    pub bookmarks: bool,
    pub attachments: bool,
}

impl AvailableViews {
    pub fn contains(&self, mode: SidebarViewMode) -> bool {
        match mode {
            SidebarViewMode::Thumbnails => self.thumbnails,
            SidebarViewMode::Bookmarks => self.bookmarks,
            SidebarViewMode::Attachments => self.attachments,
        }
    }
}

/// Document properties as reported by the viewer, plus the served file name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentInfo {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linearized: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_colors_use_camel_case_on_the_wire() {
        let colors = ThemeColors {
            background: "#000".into(),
            foreground: "#fff".into(),
            icons: "#fff".into(),
            document_color_invert_intensity: 100,
        };
        let json = serde_json::to_value(&colors).unwrap();
        assert_eq!(json["documentColorInvertIntensity"], 100);
        assert!(colors.validate().is_ok());
    }

    #[test]
    fn theme_validation_catches_each_field() {
        let mut colors = ThemeColors::default();
        colors.icons = "#fff; }".into();
        assert!(colors.validate().is_err());

        let mut colors = ThemeColors::default();
        colors.document_color_invert_intensity = 150;
        assert!(matches!(colors.validate(), Err(CssError::OutOfRange { .. })));
    }

    #[test]
    fn sidebar_mode_wire_names() {
        let json = serde_json::to_string(&SidebarViewMode::Bookmarks).unwrap();
        assert_eq!(json, "\"BOOKMARKS\"");
        let state: SidebarViewState =
            serde_json::from_str(r#"{"mode":"ATTACHMENTS","hidden":true}"#).unwrap();
        assert_eq!(state.mode, SidebarViewMode::Attachments);
        assert!(state.hidden);
    }

    #[test]
    fn document_info_tolerates_partial_fields() {
        let info: DocumentInfo =
            serde_json::from_str(r#"{"fileName":"report.pdf","pageCount":12}"#).unwrap();
        assert_eq!(info.file_name, "report.pdf");
        assert_eq!(info.page_count, Some(12));
        assert!(info.title.is_none());

        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("title"));
    }

    #[test]
    fn available_views_lookup() {
        let views = AvailableViews {
            thumbnails: true,
            bookmarks: false,
            attachments: true,
        };
        assert!(views.contains(SidebarViewMode::Thumbnails));
        assert!(!views.contains(SidebarViewMode::Bookmarks));
    }
}
