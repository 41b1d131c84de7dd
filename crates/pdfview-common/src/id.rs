use serde::{Deserialize, Serialize};
use std::fmt;

/// Token the bundled viewer is built against (its asset folder lives under it).
pub const DEFAULT_SERVED_PATH_TOKEN: &str = "64fa8636-e686-4c63-9956-132d9471ce77";

/// Opaque path segment that routes requests to the static server.
///
/// This is a routing discriminator, not a secret: it only answers
/// "does this request belong to me?" when several handlers share a port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServedPathToken(String);

impl ServedPathToken {
    /// A fresh random token. Only useful when the bundle does not hardcode one.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Accept any non-empty token made of URL-safe path characters.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ServedPathToken {
    fn default() -> Self {
        Self(DEFAULT_SERVED_PATH_TOKEN.to_string())
    }
}

impl fmt::Display for ServedPathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_token_is_the_bundle_uuid() {
        let token = ServedPathToken::default();
        assert_eq!(token.as_str(), DEFAULT_SERVED_PATH_TOKEN);
        assert!(uuid::Uuid::parse_str(token.as_str()).is_ok());
    }

    #[test]
    fn random_tokens_are_unique_v4() {
        let a = ServedPathToken::random();
        let b = ServedPathToken::random();
        assert_ne!(a, b);
        let parsed = uuid::Uuid::parse_str(a.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn parse_rejects_path_separators() {
        assert!(ServedPathToken::parse("abc-123_x").is_some());
        assert!(ServedPathToken::parse("").is_none());
        assert!(ServedPathToken::parse("a/b").is_none());
        assert!(ServedPathToken::parse("a?b").is_none());
    }

    #[test]
    fn display_matches_inner() {
        let token = ServedPathToken::parse("viewer").unwrap();
        assert_eq!(format!("{token}"), "viewer");
    }
}
