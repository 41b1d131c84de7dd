use pdfview_common::ChannelError;

/// The one thing the event channel needs from an embedded browser.
pub trait BrowserHost {
    fn execute_script(&self, js: &str) -> Result<(), ChannelError>;
}

impl BrowserHost for wry::WebView {
    fn execute_script(&self, js: &str) -> Result<(), ChannelError> {
        self.evaluate_script(js)
            .map_err(|e| ChannelError::Script(e.to_string()))
    }
}
