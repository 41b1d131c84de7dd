//! Internal types and constants for the app state module.

use std::time::Duration;

/// How often to poll for webview events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// The single viewer WebView.
pub(super) const VIEWER_VIEW_ID: u32 = 1;

/// Factor applied per zoom step.
pub(super) const ZOOM_STEP: f64 = 1.25;

/// Everything resolved before the event loop starts.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Server URL including the routing token; navigation stays under it.
    pub server_url: String,
    pub preview_url: String,
    /// File name shown in the window title until the document reports one.
    pub document_name: String,
    pub initial_page: Option<u32>,
    pub synctex: bool,
}
