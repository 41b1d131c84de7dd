//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances and collects their
//! events; `WebViewRegistry` owns the resulting handles by view id.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

pub struct WebViewManager {
    /// Event sink; the host loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let manager = WebViewManager::new();
        manager.push_event(WebViewEvent::Closed { view_id: 1 });
        manager.push_event(WebViewEvent::IpcMessage {
            view_id: 1,
            body: "{}".into(),
        });
        let events = manager.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].view_id(), 1);
        assert!(manager.drain_events().is_empty());
    }
}
