use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::BRIDGE_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::handlers::NavigationPolicy;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window, positioned at
    /// `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let policy = NavigationPolicy::new(config.allowed_origins.iter().cloned());

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_focused(true)
            .with_initialization_script(BRIDGE_INIT_SCRIPT);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), view_id);
        builder = Self::attach_navigation_handler(builder, events, view_id, policy);

        let initial_url = config.url.clone().unwrap_or_else(|| "about:blank".to_string());
        builder = match &config.url {
            Some(url) => builder.with_url(url),
            None => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder.build_as_child(window)?;

        debug!(view_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle::new(Rc::new(webview), view_id, initial_url))
    }
}
