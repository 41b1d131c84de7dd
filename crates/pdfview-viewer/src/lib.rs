//! Page-side half of the viewer bridge.
//!
//! [`MessageBus`] receives host commands and sends browser events.
//! [`ViewerIntegration`] turns those commands into calls on a
//! [`ViewerCapabilities`] adapter and reports what the viewer does: page
//! changes, clicks, load results, sidebar and presentation-mode changes,
//! and SyncTeX reverse/forward search. [`viewer_bridge_script`] is the same
//! layer for the browser, injected by the host on every page load.

pub mod bootstrap;
pub mod bridge;
pub mod bus;
pub mod capabilities;
pub mod geometry;
pub mod integration;
pub mod state;
pub mod theme;

pub use bootstrap::{document_load, run_when_loaded, DocumentLoad, DocumentLoadSignal};
pub use bridge::{viewer_bridge_script, EMBED_ID};
pub use bus::{EventTrigger, HostTransport, MessageBus, SubscriptionId};
pub use capabilities::{
    FindDirection, OverlayId, Rotation, ScrollOrientation, SpreadMode, ViewerCapabilities,
};
pub use integration::{
    file_name_from_url, wire, Click, ClickTarget, PresentationTransition, ViewerIntegration,
};
pub use state::ViewerRuntimeState;
