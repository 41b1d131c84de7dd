//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;


use crate::schema::PdfViewConfig;
use helpers::{validate_range, validate_range_f64};
use pdfview_common::sanitize::validate_css_color;
use pdfview_common::{ConfigError, ServedPathToken};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PdfViewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_server(&mut errors, config);
    validate_viewer(&mut errors, config);
    validate_theme(&mut errors, config);
    validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_server(errors: &mut Vec<String>, config: &PdfViewConfig) {
    let server = &config.server;

    if server.host.trim().is_empty() {
        errors.push("server.host must not be empty".into());
    }
    if let Some(token) = &server.token {
        if ServedPathToken::parse(token).is_none() {
            errors.push(format!(
                "server.token = {token:?} must be non-empty and URL-path safe"
            ));
        }
    }
    let entry = &server.entry_point;
    if entry.is_empty() || entry.starts_with('/') || entry.split('/').any(|s| s == "..") {
        errors.push(format!(
            "server.entry_point = {entry:?} must be a relative bundle path"
        ));
    }
    let ext = &server.document_extension;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.push(format!(
            "server.document_extension = {ext:?} must be a bare extension like \"pdf\""
        ));
    }
}

fn validate_viewer(errors: &mut Vec<String>, config: &PdfViewConfig) {
    validate_range_f64(
        errors,
        "viewer.default_scale",
        config.viewer.default_scale,
        0.25,
        10.0,
    );
}

fn validate_theme(errors: &mut Vec<String>, config: &PdfViewConfig) {
    let theme = &config.theme;
    for (name, value) in [
        ("theme.background", &theme.background),
        ("theme.foreground", &theme.foreground),
        ("theme.icons", &theme.icons),
    ] {
        if let Err(e) = validate_css_color(value) {
            errors.push(format!("{name}: {e}"));
        }
    }
    validate_range(
        errors,
        "theme.document_invert_intensity",
        u32::from(theme.document_invert_intensity),
        0,
        100,
    );
}

fn validate_window(errors: &mut Vec<String>, config: &PdfViewConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 10_000);
    validate_range(errors, "window.height", config.window.height, 200, 10_000);
}
