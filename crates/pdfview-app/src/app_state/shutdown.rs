//! Graceful shutdown: dispose the channel, then destroy the WebView.

use super::core::PdfViewApp;

impl PdfViewApp {
    /// Tear down the viewer before the window goes away.
    ///
    /// Destroying the WebView disposes its event channel first, so the page
    /// forwarders are released while the page can still run script.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.webviews = None;
        self.should_exit = true;

        tracing::info!("Viewer shut down");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::PdfViewApp;
    use crate::app_state::types::LaunchOptions;
    use pdfview_config::PdfViewConfig;

    #[test]
    fn shutdown_without_window_is_safe() {
        let mut app = PdfViewApp::new(
            PdfViewConfig::default(),
            LaunchOptions {
                server_url: "http://127.0.0.1:1/t".into(),
                preview_url: "http://127.0.0.1:1/t/index.html".into(),
                document_name: "a.pdf".into(),
                initial_page: None,
                synctex: false,
            },
        );
        app.shutdown();
        app.shutdown();
        assert!(app.should_exit);
        assert!(app.webviews.is_none());
    }
}
