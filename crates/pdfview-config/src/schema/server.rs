use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Local static server that feeds the embedded viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind. Keep this on loopback.
    pub host: String,
    /// Port to bind; `0` picks an ephemeral port.
    pub port: u16,
    /// Override for the served path token. The bundled viewer expects the default.
    pub token: Option<String>,
    /// Serve the viewer bundle from this directory instead of the packaged assets.
    pub bundle_dir: Option<PathBuf>,
    /// Bundle entry point the preview URL opens.
    pub entry_point: String,
    /// The only extension external file requests may target.
    pub document_extension: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            token: None,
            bundle_dir: None,
            entry_point: "index.html".into(),
            document_extension: "pdf".into(),
        }
    }
}
