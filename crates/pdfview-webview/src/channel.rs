//! Host side of the event channel.
//!
//! A channel goes through four states. [`DeclaredEvents`] is the unbound list
//! of browser event kinds the host cares about. Binding it to a browser yields
//! an [`EventChannel`] with one bridge per kind. [`EventChannel::inject`]
//! installs the page-side forwarders, after which inbound messages are
//! delivered. [`EventChannel::dispose`] releases every bridge.

use std::collections::HashSet;
use std::rc::Rc;

use pdfview_common::{BrowserEvent, BrowserEventKind, ChannelError, HostCommand, IpcMessage};

use crate::browser::BrowserHost;
use crate::ipc::{forward_script, release_script};
use crate::sender::EventSender;

pub type Handler = Box<dyn FnMut(&BrowserEvent)>;
pub type ReplyHandler = Box<dyn FnMut(&BrowserEvent) -> Option<HostCommand>>;

enum Callback {
    Plain(Handler),
    Reply(ReplyHandler),
}

struct Bridge {
    kind: BrowserEventKind,
    callback: Option<Callback>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// Bridges exist; nothing is forwarded from the page yet.
    Bound,
    Active,
    Disposed,
}

/// Validated set of browser event kinds, not yet tied to a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredEvents {
    kinds: Vec<BrowserEventKind>,
}

impl DeclaredEvents {
    pub fn new(kinds: impl IntoIterator<Item = BrowserEventKind>) -> Result<Self, ChannelError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for kind in kinds {
            if !seen.insert(kind) {
                return Err(ChannelError::DuplicateEvent(kind.as_str().to_string()));
            }
            ordered.push(kind);
        }
        Ok(Self { kinds: ordered })
    }

    /// Every kind the viewer can emit.
    pub fn all() -> Self {
        Self {
            kinds: BrowserEventKind::ALL.to_vec(),
        }
    }

    pub fn kinds(&self) -> &[BrowserEventKind] {
        &self.kinds
    }

    pub fn bind(self, browser: Rc<dyn BrowserHost>) -> EventChannel {
        let bridges = self
            .kinds
            .into_iter()
            .map(|kind| Bridge {
                kind,
                callback: None,
            })
            .collect::<Vec<_>>();
        tracing::debug!(bridges = bridges.len(), "event channel bound");
        EventChannel {
            browser,
            bridges,
            state: ChannelState::Bound,
        }
    }
}

pub struct EventChannel {
    browser: Rc<dyn BrowserHost>,
    bridges: Vec<Bridge>,
    state: ChannelState,
}

impl EventChannel {
    pub fn from_list(
        browser: Rc<dyn BrowserHost>,
        kinds: impl IntoIterator<Item = BrowserEventKind>,
    ) -> Result<Self, ChannelError> {
        Ok(DeclaredEvents::new(kinds)?.bind(browser))
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    pub fn declared(&self) -> impl Iterator<Item = BrowserEventKind> + '_ {
        self.bridges.iter().map(|b| b.kind)
    }

    /// Bridges not yet released.
    pub fn live_bridges(&self) -> usize {
        self.bridges.len()
    }

    pub fn sender(&self) -> EventSender {
        EventSender::new(Rc::clone(&self.browser))
    }

    /// Set the callback for `kind`, replacing any earlier one.
    pub fn add_handler<F>(&mut self, kind: BrowserEventKind, handler: F) -> Result<(), ChannelError>
    where
        F: FnMut(&BrowserEvent) + 'static,
    {
        self.set_callback(kind, Callback::Plain(Box::new(handler)))
    }

    /// Like [`add_handler`](Self::add_handler), but a returned command is
    /// sent back to the page.
    pub fn add_handler_with_reply<F>(
        &mut self,
        kind: BrowserEventKind,
        handler: F,
    ) -> Result<(), ChannelError>
    where
        F: FnMut(&BrowserEvent) -> Option<HostCommand> + 'static,
    {
        self.set_callback(kind, Callback::Reply(Box::new(handler)))
    }

    fn set_callback(&mut self, kind: BrowserEventKind, callback: Callback) -> Result<(), ChannelError> {
        if self.state == ChannelState::Disposed {
            return Err(ChannelError::Disposed);
        }
        let bridge = self
            .bridges
            .iter_mut()
            .find(|b| b.kind == kind)
            .ok_or_else(|| ChannelError::UndeclaredEvent(kind.as_str().to_string()))?;
        if bridge.callback.replace(callback).is_some() {
            tracing::debug!(%kind, "replacing event handler");
        }
        Ok(())
    }

    /// Install the page-side forwarders. Repeated calls are no-ops.
    pub fn inject(&mut self) -> Result<(), ChannelError> {
        match self.state {
            ChannelState::Disposed => return Err(ChannelError::Disposed),
            ChannelState::Active => {
                tracing::debug!("subscriptions already injected");
                return Ok(());
            }
            ChannelState::Bound => {}
        }

        for bridge in &self.bridges {
            if bridge.callback.is_none() {
                tracing::warn!(kind = %bridge.kind, "injecting event without a handler");
            }
            self.browser.execute_script(&forward_script(bridge.kind))?;
        }
        self.state = ChannelState::Active;
        tracing::info!(bridges = self.bridges.len(), "event subscriptions injected");
        Ok(())
    }

    /// Handle one raw message from the page.
    ///
    /// Returns `Ok(false)` when the message was dropped because the channel
    /// is not active or nobody handles the kind.
    pub fn deliver(&mut self, raw: &str) -> Result<bool, ChannelError> {
        if self.state != ChannelState::Active {
            tracing::debug!(state = ?self.state, "dropping message outside active state");
            return Ok(false);
        }

        let event = IpcMessage::from_json(raw)?.into_browser_event()?;
        let kind = event.kind();
        let bridge = self
            .bridges
            .iter_mut()
            .find(|b| b.kind == kind)
            .ok_or_else(|| ChannelError::UndeclaredEvent(kind.as_str().to_string()))?;

        let reply = match bridge.callback.as_mut() {
            Some(Callback::Plain(handler)) => {
                handler(&event);
                None
            }
            Some(Callback::Reply(handler)) => handler(&event),
            None => {
                tracing::debug!(%kind, "no handler for event");
                return Ok(false);
            }
        };

        if let Some(command) = reply {
            self.sender().trigger(&command)?;
        }
        Ok(true)
    }

    /// Release every bridge. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.state == ChannelState::Disposed {
            return;
        }
        if self.state == ChannelState::Active {
            let script = release_script(self.declared());
            // The page may already be gone during teardown.
            if let Err(e) = self.browser.execute_script(&script) {
                tracing::debug!(error = %e, "could not release page forwarders");
            }
        }
        let released = self.bridges.len();
        self.bridges.clear();
        self.state = ChannelState::Disposed;
        tracing::info!(released, "event channel disposed");
    }
}

impl Drop for EventChannel {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for EventChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field("state", &self.state)
            .field("bridges", &self.bridges.len())
            .finish()
    }
}
