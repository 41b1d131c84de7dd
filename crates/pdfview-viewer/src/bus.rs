//! Page-side message bus.
//!
//! Host commands are published to handlers subscribed per kind, in
//! subscription order. Browser events leave through [`EventTrigger`], the
//! only path to the host.

use std::collections::HashMap;
use std::rc::Rc;

use tokio::sync::mpsc::UnboundedSender;

use pdfview_common::{
    BrowserEvent, ChannelError, HostCommand, HostCommandKind, IpcMessage, ViewerError,
};

/// Delivers serialized envelopes to the host. Must not block.
pub trait HostTransport {
    fn post(&self, message: String) -> Result<(), ViewerError>;
}

impl HostTransport for UnboundedSender<String> {
    fn post(&self, message: String) -> Result<(), ViewerError> {
        self.send(message).map_err(|_| ViewerError::TransportClosed)
    }
}

/// Cloneable handle for sending browser events to the host.
#[derive(Clone)]
pub struct EventTrigger {
    transport: Rc<dyn HostTransport>,
}

impl EventTrigger {
    pub fn new(transport: Rc<dyn HostTransport>) -> Self {
        Self { transport }
    }

    pub fn trigger(&self, event: &BrowserEvent) -> Result<(), ViewerError> {
        let message = IpcMessage::from(event);
        tracing::debug!(kind = %message.kind, "triggering host event");
        self.transport.post(message.to_json())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type CommandHandler = Box<dyn FnMut(&HostCommand)>;

pub struct MessageBus {
    handlers: HashMap<HostCommandKind, Vec<(SubscriptionId, CommandHandler)>>,
    next_id: u64,
    trigger: EventTrigger,
}

impl MessageBus {
    pub fn new(transport: impl HostTransport + 'static) -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 0,
            trigger: EventTrigger::new(Rc::new(transport)),
        }
    }

    pub fn subscribe<F>(&mut self, kind: HostCommandKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&HostCommand) + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.handlers
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for list in self.handlers.values_mut() {
            if let Some(pos) = list.iter().position(|(sid, _)| *sid == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn subscriber_count(&self, kind: HostCommandKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Run every handler for the command's kind. Returns how many ran.
    pub fn publish(&mut self, command: &HostCommand) -> usize {
        let kind = command.kind();
        let Some(list) = self.handlers.get_mut(&kind) else {
            tracing::debug!(%kind, "no subscribers");
            return 0;
        };
        for (_, handler) in list.iter_mut() {
            handler(command);
        }
        list.len()
    }

    /// Decode a raw envelope from the host and publish it.
    pub fn publish_raw(&mut self, raw: &str) -> Result<usize, ChannelError> {
        let command = IpcMessage::from_json(raw)?.into_host_command()?;
        Ok(self.publish(&command))
    }

    pub fn trigger(&self, event: &BrowserEvent) -> Result<(), ViewerError> {
        self.trigger.trigger(event)
    }

    pub fn event_trigger(&self) -> EventTrigger {
        self.trigger.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::sync::mpsc;

    #[test]
    fn handlers_run_in_subscription_order() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut bus = MessageBus::new(tx);
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        bus.subscribe(HostCommandKind::SetPage, move |_| a.borrow_mut().push(1));
        bus.subscribe(HostCommandKind::SetPage, move |_| b.borrow_mut().push(2));

        assert_eq!(bus.publish(&HostCommand::SetPage { page_number: 3 }), 2);
        assert_eq!(*log.borrow(), vec![1, 2]);
        assert_eq!(bus.publish(&HostCommand::PrintDocument), 0);
    }

    #[test]
    fn unsubscribe_removes_only_that_handler() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut bus = MessageBus::new(tx);
        let first = bus.subscribe(HostCommandKind::GotoNextPage, |_| {});
        bus.subscribe(HostCommandKind::GotoNextPage, |_| {});
        assert!(bus.unsubscribe(first));
        assert!(!bus.unsubscribe(first));
        assert_eq!(bus.subscriber_count(HostCommandKind::GotoNextPage), 1);
    }

    #[test]
    fn publish_raw_decodes_envelopes() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut bus = MessageBus::new(tx);
        let seen = Rc::new(RefCell::new(None));
        let s = seen.clone();
        bus.subscribe(HostCommandKind::SetScale, move |cmd| {
            *s.borrow_mut() = Some(cmd.clone())
        });
        bus.publish_raw(r#"{"kind":"SET_SCALE","payload":{"value":2.5}}"#)
            .unwrap();
        assert_eq!(*seen.borrow(), Some(HostCommand::SetScale { value: 2.5 }));

        assert!(matches!(
            bus.publish_raw(r#"{"kind":"PAGE_CHANGED","payload":{"pageNumber":1}}"#),
            Err(ChannelError::UndeclaredEvent(_))
        ));
    }

    #[test]
    fn trigger_posts_envelope() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let bus = MessageBus::new(tx);
        bus.trigger(&BrowserEvent::FrameFocused {}).unwrap();
        let raw = rx.try_recv().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "FRAME_FOCUSED", "payload": {}}));
    }

    #[test]
    fn closed_transport_is_reported() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let bus = MessageBus::new(tx);
        assert!(matches!(
            bus.trigger(&BrowserEvent::UnhandledError {}),
            Err(ViewerError::TransportClosed)
        ));
    }
}
