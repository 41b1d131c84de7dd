use serde::{Deserialize, Serialize};

/// Initial state pushed into the viewer once the channel is live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Zoom applied on open (valid range: 0.25-10.0).
    pub default_scale: f64,
    /// Whether ctrl-click reverse search is enabled.
    pub synctex_available: bool,
    /// Show the viewer's own toolbar on top of the host chrome.
    pub show_toolbar: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_scale: 1.0,
            synctex_available: false,
            show_toolbar: false,
        }
    }
}
