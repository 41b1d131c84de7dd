use pdfview_common::protocol::ThemeColors;
use serde::{Deserialize, Serialize};

/// Colors forwarded to the viewer with `SET_THEME_COLORS`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub foreground: String,
    pub icons: String,
    /// 0 keeps pages as authored, 100 fully inverts them (dark mode).
    pub document_invert_intensity: u8,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1e1f22".into(),
            foreground: "#dfe1e5".into(),
            icons: "#ced0d6".into(),
            document_invert_intensity: 0,
        }
    }
}

impl ThemeConfig {
    pub fn to_theme_colors(&self) -> ThemeColors {
        ThemeColors {
            background: self.background.clone(),
            foreground: self.foreground.clone(),
            icons: self.icons.clone(),
            document_color_invert_intensity: self.document_invert_intensity,
        }
    }
}
