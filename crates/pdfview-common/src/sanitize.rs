//! CSS value sanitization for theme colors injected into the viewer.
//!
//! Theme colors end up inside a `<style>` block in the embedded page, so
//! only inert value formats are accepted:
//! - Hex colors: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)` with numeric arguments
//!
//! Anything carrying structural characters (`;`, `{`, `}`, `<`, `>`) or
//! function-like payloads (`url(`, `expression(`, ...) is refused.

use crate::errors::CssError;

/// Validate a CSS color value.
pub fn validate_css_color(value: &str) -> Result<(), CssError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CssError::Empty);
    }

    check_injection_patterns(trimmed)?;

    if let Some(hex) = trimmed.strip_prefix('#') {
        return validate_hex_digits(hex, trimmed);
    }
    if trimmed.starts_with("rgba(") || trimmed.starts_with("rgb(") {
        return validate_rgb_function(trimmed);
    }

    Err(CssError::UnsupportedColor(trimmed.to_string()))
}

/// Validate a document invert intensity (a percentage).
pub fn validate_invert_intensity(value: u8) -> Result<(), CssError> {
    if value > 100 {
        return Err(CssError::OutOfRange {
            value: f64::from(value),
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(())
}

fn check_injection_patterns(value: &str) -> Result<(), CssError> {
    const DANGEROUS: &[&str] = &[
        "expression(",
        "url(",
        "javascript:",
        "eval(",
        "@import",
        "@charset",
        "behavior:",
        "-moz-binding",
    ];

    let lower = value.to_lowercase();
    if let Some(pattern) = DANGEROUS.iter().find(|p| lower.contains(*p)) {
        return Err(CssError::Injection((*pattern).to_string()));
    }
    if let Some(ch) = [';', '{', '}', '<', '>'].iter().find(|c| value.contains(**c)) {
        return Err(CssError::Injection(ch.to_string()));
    }
    Ok(())
}

fn validate_hex_digits(hex: &str, original: &str) -> Result<(), CssError> {
    if !matches!(hex.len(), 3 | 4 | 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CssError::MalformedColor(original.to_string()));
    }
    Ok(())
}

fn validate_rgb_function(value: &str) -> Result<(), CssError> {
    let (inner, expected) = if let Some(rest) = value.strip_prefix("rgba(") {
        (rest, 4)
    } else if let Some(rest) = value.strip_prefix("rgb(") {
        (rest, 3)
    } else {
        return Err(CssError::MalformedColor(value.to_string()));
    };

    let inner = inner
        .strip_suffix(')')
        .ok_or_else(|| CssError::MalformedColor(value.to_string()))?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != expected || parts.iter().any(|p| p.parse::<f64>().is_err()) {
        return Err(CssError::MalformedColor(value.to_string()));
    }
    Ok(())
}
