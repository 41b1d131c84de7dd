//! Host side of the embedded viewer.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances with a navigation allowlist
//! - A typed event channel from page to host, with injection and dispose
//! - A command sender from host to page
//! - Page load / title / navigation events for the host loop

pub mod browser;
pub mod channel;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod sender;

pub use browser::BrowserHost;
pub use channel::{ChannelState, DeclaredEvents, EventChannel};
pub use events::{PageLoadState, WebViewEvent};
pub use manager::handlers::NavigationPolicy;
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use sender::EventSender;
