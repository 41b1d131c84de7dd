//! Configuration schema types for pdfview.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod server;
mod system;
mod theme;
mod viewer;
mod window;

pub use server::*;
pub use system::*;
pub use theme::*;
pub use viewer::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfViewConfig {
    pub server: ServerConfig,
    pub viewer: ViewerConfig,
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
