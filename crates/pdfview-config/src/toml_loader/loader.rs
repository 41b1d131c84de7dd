//! Read config from an explicit path or the platform default.

use crate::schema::PdfViewConfig;
use crate::validation;
use pdfview_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation failures are logged
/// and the parsed config is returned as-is; callers that need a valid config
/// run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<PdfViewConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: PdfViewConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/pdfview/config.toml`
/// On macOS: `~/Library/Application Support/pdfview/config.toml`
///
/// If the file does not exist, a documented default is written and defaults
/// are returned.
pub fn load_default() -> Result<PdfViewConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(PdfViewConfig::default())
        }
        Err(e) => Err(e),
    }
}
