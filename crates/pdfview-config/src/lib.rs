//! pdfview configuration.
//!
//! TOML-based configuration with defaults for every section, so partial
//! configs work out of the box.
//!
//! ```rust,no_run
//! use pdfview_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{PdfViewConfig, CONFIG_SCHEMA_VERSION};

use pdfview_common::ConfigError;
use std::path::Path;

/// Load config from `path` when given, otherwise from the platform default,
/// then validate it.
pub fn load_config(path: Option<&Path>) -> Result<PdfViewConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PdfViewConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&PdfViewConfig::default());
        for section in ["server", "viewer", "theme", "window", "logging"] {
            assert!(json.contains(&format!("\"{section}\"")), "{section}");
        }
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nicons = \"red\"\n").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn theme_config_maps_to_protocol_colors() {
        let theme = schema::ThemeConfig {
            document_invert_intensity: 100,
            ..Default::default()
        };
        let colors = theme.to_theme_colors();
        assert_eq!(colors.document_color_invert_intensity, 100);
        assert_eq!(colors.background, theme.background);
        assert!(colors.validate().is_ok());
    }
}
