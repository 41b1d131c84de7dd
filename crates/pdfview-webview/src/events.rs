//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView, drained by the host loop.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        view_id: u32,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view_id: u32,
        title: String,
    },
    /// Raw envelope posted by the page, already checked to be JSON.
    IpcMessage {
        view_id: u32,
        body: String,
    },
    /// An allowed navigation.
    NavigationRequested {
        view_id: u32,
        url: String,
    },
    Closed {
        view_id: u32,
    },
}

impl WebViewEvent {
    pub fn view_id(&self) -> u32 {
        match self {
            Self::PageLoad { view_id, .. }
            | Self::TitleChanged { view_id, .. }
            | Self::IpcMessage { view_id, .. }
            | Self::NavigationRequested { view_id, .. }
            | Self::Closed { view_id } => *view_id,
        }
    }
}
