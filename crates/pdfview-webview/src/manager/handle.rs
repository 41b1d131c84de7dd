use std::rc::Rc;

use pdfview_common::ChannelError;
use wry::WebView;

use crate::browser::BrowserHost;
use crate::channel::{DeclaredEvents, EventChannel};
use crate::sender::EventSender;

/// A managed WebView plus the event channel bound to it.
///
/// The channel lives exactly as long as the handle: destroying or dropping
/// the handle disposes it.
pub struct WebViewHandle {
    webview: Rc<WebView>,
    view_id: u32,
    current_url: String,
    current_title: String,
    channel: Option<EventChannel>,
}

impl WebViewHandle {
    pub(super) fn new(webview: Rc<WebView>, view_id: u32, current_url: String) -> Self {
        Self {
            webview,
            view_id,
            current_url,
            current_title: String::new(),
            channel: None,
        }
    }

    pub fn view_id(&self) -> u32 {
        self.view_id
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Bind `events` to this WebView. A previously attached channel is
    /// disposed first.
    pub fn attach_channel(&mut self, events: DeclaredEvents) -> &mut EventChannel {
        if let Some(mut old) = self.channel.take() {
            old.dispose();
        }
        let browser: Rc<dyn BrowserHost> = self.webview.clone();
        self.channel.insert(events.bind(browser))
    }

    pub fn channel(&self) -> Option<&EventChannel> {
        self.channel.as_ref()
    }

    pub fn channel_mut(&mut self) -> Option<&mut EventChannel> {
        self.channel.as_mut()
    }

    /// Sender for host commands; works with or without a channel.
    pub fn sender(&self) -> EventSender {
        EventSender::new(self.webview.clone())
    }

    /// Hand a raw IPC body to the attached channel.
    pub fn deliver(&mut self, body: &str) -> Result<bool, ChannelError> {
        match self.channel.as_mut() {
            Some(channel) => channel.deliver(body),
            None => Ok(false),
        }
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Hand keyboard focus back to the host window.
    pub fn focus_parent(&self) -> Result<(), wry::Error> {
        self.webview.focus_parent()
    }

    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Dispose the channel now instead of waiting for drop.
    pub fn dispose_channel(&mut self) {
        if let Some(channel) = self.channel.as_mut() {
            channel.dispose();
        }
    }
}

impl Drop for WebViewHandle {
    fn drop(&mut self) {
        self.dispose_channel();
    }
}
