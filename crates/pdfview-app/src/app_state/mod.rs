//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the viewer WebView, and its event channel.

mod bounds;
mod core;
mod event_handler;
mod init;
mod keymap;
mod polling;
mod shutdown;
mod status;
mod title;
mod types;

pub use core::PdfViewApp;
pub use types::LaunchOptions;
