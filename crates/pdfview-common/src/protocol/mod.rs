//! Message catalogs exchanged between the host and the embedded viewer.
//!
//! Both directions share one envelope: `{"kind": "<NAME>", "payload": <json>}`.
//! Kinds are closed enums, so an unknown name is rejected when the message
//! is decoded instead of being silently dropped by a string lookup.

mod browser;
mod host;
mod kinds;
mod payloads;

pub use browser::BrowserEvent;
pub use host::HostCommand;
pub use kinds::{BrowserEventKind, HostCommandKind};
pub use payloads::{
    AvailableViews, DocumentInfo, ForwardSearchTarget, SidebarViewMode, SidebarViewState,
    SyncPoint, ThemeColors,
};

use serde::{Deserialize, Serialize};

use crate::errors::ChannelError;

/// Untyped wire envelope, decoded before the payload is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    pub fn from_json(raw: &str) -> Result<Self, ChannelError> {
        serde_json::from_str(raw).map_err(|e| ChannelError::MalformedMessage(e.to_string()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Decode the payload as a browser event; the kind must be known.
    ///
    /// Every browser event carries a body, so a missing or `null` payload
    /// reads as `{}`.
    pub fn into_browser_event(self) -> Result<BrowserEvent, ChannelError> {
        let kind: BrowserEventKind = self.kind.parse()?;
        let payload = match self.payload {
            serde_json::Value::Null => serde_json::json!({}),
            payload => payload,
        };
        decode_tagged(kind.as_str(), payload)
    }

    /// Decode the payload as a host command; the kind must be known.
    pub fn into_host_command(self) -> Result<HostCommand, ChannelError> {
        let kind: HostCommandKind = self.kind.parse()?;
        decode_tagged(kind.as_str(), self.payload)
    }
}

impl From<&BrowserEvent> for IpcMessage {
    fn from(event: &BrowserEvent) -> Self {
        envelope(event, event.kind().as_str())
    }
}

impl From<&HostCommand> for IpcMessage {
    fn from(command: &HostCommand) -> Self {
        envelope(command, command.kind().as_str())
    }
}

fn envelope<T: Serialize>(value: &T, kind: &str) -> IpcMessage {
    let payload = serde_json::to_value(value)
        .ok()
        .and_then(|mut v| v.get_mut("payload").map(serde_json::Value::take))
        .unwrap_or(serde_json::Value::Null);
    IpcMessage {
        kind: kind.to_string(),
        payload,
    }
}

fn decode_tagged<T: for<'de> Deserialize<'de>>(
    kind: &str,
    payload: serde_json::Value,
) -> Result<T, ChannelError> {
    let tagged = if payload.is_null() {
        serde_json::json!({ "kind": kind })
    } else {
        serde_json::json!({ "kind": kind, "payload": payload })
    };
    serde_json::from_value(tagged)
        .map_err(|e| ChannelError::MalformedMessage(format!("{kind}: {e}")))
}
