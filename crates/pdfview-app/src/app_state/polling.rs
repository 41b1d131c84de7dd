//! Event polling: drain the WebView queue, deliver channel messages, and
//! push queued commands back to the viewer.

use std::rc::Rc;
use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::Fullscreen;

use pdfview_webview::{ChannelState, PageLoadState, WebViewEvent};

use super::core::PdfViewApp;
use super::status::bind_channel;
use super::types::{POLL_INTERVAL, VIEWER_VIEW_ID};

impl PdfViewApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.flush_outbox();
            self.apply_status();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::PageLoad {
                    view_id,
                    state: PageLoadState::Finished,
                    url,
                } => self.on_page_loaded(view_id, &url),
                WebViewEvent::PageLoad { view_id, url, .. } => {
                    tracing::debug!(view_id, %url, "page load started");
                }
                WebViewEvent::IpcMessage { view_id, body } => self.deliver_ipc(view_id, &body),
                WebViewEvent::TitleChanged { view_id, title } => {
                    tracing::debug!(view_id, %title, "page title changed");
                    if let Some(handle) = self.viewer_handle_mut() {
                        handle.set_title(title);
                    }
                }
                WebViewEvent::NavigationRequested { view_id, url } => {
                    tracing::debug!(view_id, %url, "navigation");
                }
                WebViewEvent::Closed { view_id } => {
                    tracing::info!(view_id, "viewer closed");
                }
            }
        }
    }

    /// A finished load of the viewer page: (re)bind the channel, inject the
    /// forwarders, and push the initial state.
    fn on_page_loaded(&mut self, view_id: u32, url: &str) {
        if view_id != VIEWER_VIEW_ID || !url.starts_with(&self.launch.server_url) {
            tracing::debug!(view_id, %url, "ignoring load outside the viewer");
            return;
        }

        let initial = self.initial_commands();
        let on_load = self.on_load_commands();
        let status = Rc::clone(&self.status);
        let Some(handle) = self.viewer_handle_mut() else {
            return;
        };

        // A reload wipes the page-side forwarders; start from a fresh channel.
        let reloaded = handle
            .channel()
            .map_or(true, |channel| channel.state() != ChannelState::Bound);
        if reloaded {
            tracing::info!(view_id, "viewer page reloaded, rebinding channel");
            if let Err(e) = bind_channel(handle, &status) {
                tracing::error!(view_id, error = %e, "failed to rebind event channel");
                return;
            }
        }

        let injected = match handle.channel_mut() {
            Some(channel) => channel.inject(),
            None => return,
        };
        if let Err(e) = injected {
            tracing::error!(view_id, error = %e, "failed to inject event subscriptions");
            return;
        }

        status.borrow_mut().begin_load(on_load);
        let sender = handle.sender();
        for command in initial {
            if let Err(e) = sender.trigger(&command) {
                tracing::warn!(view_id, kind = %command.kind(), error = %e, "initial command failed");
            }
        }
    }

    fn deliver_ipc(&mut self, view_id: u32, body: &str) {
        let Some(handle) = self.viewer_handle_mut() else {
            return;
        };
        match handle.deliver(body) {
            Ok(true) => {}
            Ok(false) => tracing::debug!(view_id, "IPC message dropped"),
            Err(e) => tracing::warn!(view_id, error = %e, "rejected IPC message"),
        }
    }

    /// Send everything queued by handlers and shortcuts since the last poll.
    fn flush_outbox(&mut self) {
        let outbox = self.status.borrow_mut().take_outbox();
        if outbox.is_empty() {
            return;
        }
        let Some(handle) = self.viewer_handle_mut() else {
            return;
        };
        let sender = handle.sender();
        for command in outbox {
            tracing::debug!(kind = %command.kind(), "sending command");
            if let Err(e) = sender.trigger(&command) {
                tracing::warn!(kind = %command.kind(), error = %e, "command failed");
            }
        }
    }

    /// Reflect status changes in the window.
    fn apply_status(&mut self) {
        let (title_dirty, fullscreen, focus_host) = {
            let mut status = self.status.borrow_mut();
            (
                std::mem::take(&mut status.title_dirty),
                status.fullscreen.take(),
                std::mem::take(&mut status.focus_host),
            )
        };

        if title_dirty {
            self.update_window_title();
        }
        if let (Some(on), Some(window)) = (fullscreen, &self.window) {
            window.set_fullscreen(on.then_some(Fullscreen::Borderless(None)));
        }
        if focus_host {
            if let Some(handle) = self.viewer_handle_mut() {
                if let Err(e) = handle.focus_parent() {
                    tracing::debug!(error = %e, "could not return focus to the window");
                }
            }
        }
    }
}
