use serde::{Deserialize, Serialize};

/// Host window hosting the embedded browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial width in logical pixels (valid range: 200-10000).
    pub width: u32,
    /// Initial height in logical pixels (valid range: 200-10000).
    pub height: u32,
    /// Enable browser devtools (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "pdfview".into(),
            width: 900,
            height: 1100,
            devtools: cfg!(debug_assertions),
        }
    }
}
