//! Window and viewer WebView creation.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use pdfview_common::PdfViewError;
use pdfview_viewer::viewer_bridge_script;
use pdfview_webview::{WebViewConfig, WebViewManager, WebViewRegistry};

use super::bounds::window_bounds;
use super::core::PdfViewApp;
use super::status::bind_channel;
use super::types::VIEWER_VIEW_ID;

impl PdfViewApp {
    /// Create the window and the viewer WebView. Failure is recorded as the
    /// startup error.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        match self.try_initialize_window(event_loop) {
            Ok(()) => {
                tracing::info!("Window created and viewer loading");
                true
            }
            Err(e) => {
                tracing::error!("Failed to initialize viewer: {e}");
                self.startup_error = Some(e);
                false
            }
        }
    }

    fn try_initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PdfViewError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));
        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PdfViewError::WebView(format!("create window: {e}")))?;

        let mut registry = WebViewRegistry::new(WebViewManager::new());
        let config = self.viewer_webview_config();
        let bounds = window_bounds(window.inner_size(), window.scale_factor());

        let handle = registry
            .create(VIEWER_VIEW_ID, window.as_ref(), bounds, config)
            .map_err(|e| PdfViewError::WebView(e.to_string()))?;
        self.status.borrow_mut().begin_load(Vec::new());
        bind_channel(handle, &self.status)?;

        tracing::info!(
            view_id = VIEWER_VIEW_ID,
            url = %self.launch.preview_url,
            "viewer WebView created"
        );

        self.webviews = Some(registry);
        self.window = Some(window);
        Ok(())
    }

    /// The viewer page, restricted to the server, with the viewer
    /// integration script installed.
    pub(super) fn viewer_webview_config(&self) -> WebViewConfig {
        WebViewConfig {
            devtools: self.config.window.devtools,
            init_scripts: vec![viewer_bridge_script()],
            ..WebViewConfig::for_origin(
                self.launch.server_url.as_str(),
                self.launch.preview_url.as_str(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pdfview_config::PdfViewConfig;

    use super::super::types::LaunchOptions;
    use super::*;

    #[test]
    fn viewer_page_gets_the_integration_script() {
        let app = PdfViewApp::new(
            PdfViewConfig::default(),
            LaunchOptions {
                server_url: "http://127.0.0.1:9000/token".into(),
                preview_url: "http://127.0.0.1:9000/token/index.html?file=get-file/%2Fa.pdf".into(),
                document_name: "a.pdf".into(),
                initial_page: None,
                synctex: false,
            },
        );
        let config = app.viewer_webview_config();
        assert_eq!(config.allowed_origins, vec!["http://127.0.0.1:9000/token".to_string()]);
        assert_eq!(config.init_scripts, vec![viewer_bridge_script()]);
    }
}
