use std::collections::HashMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Owns WebView handles by view id.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<u32, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<&mut WebViewHandle, wry::Error> {
        let handle = self.manager.create(view_id, window, bounds, config)?;
        if self.handles.contains_key(&view_id) {
            self.destroy(view_id);
        }
        Ok(self.handles.entry(view_id).or_insert(handle))
    }

    pub fn get(&self, view_id: u32) -> Option<&WebViewHandle> {
        self.handles.get(&view_id)
    }

    pub fn get_mut(&mut self, view_id: u32) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&view_id)
    }

    /// Destroy a WebView, disposing its channel before the view goes away.
    pub fn destroy(&mut self, view_id: u32) -> bool {
        match self.handles.remove(&view_id) {
            Some(mut handle) => {
                handle.dispose_channel();
                drop(handle);
                debug!(view_id, "WebView destroyed");
                self.manager.push_event(WebViewEvent::Closed { view_id });
                true
            }
            None => false,
        }
    }

    pub fn active_views(&self) -> Vec<u32> {
        self.handles.keys().copied().collect()
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active WebViews. Used during shutdown.
    pub fn destroy_all(&mut self) {
        for view_id in self.active_views() {
            self.destroy(view_id);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
