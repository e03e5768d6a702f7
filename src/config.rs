//! Client configuration with serde serialization/deserialization
//!
//! Every field is optional; anything left out falls back to the documented
//! default when a [`Client`](crate::Client) is constructed.

use serde::{Deserialize, Serialize};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.pxshot.com";

/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Optional overrides applied when building a [`Client`](crate::Client)
///
/// # Examples
///
/// ```rust
/// use pxshot::ClientConfig;
///
/// // Use defaults
/// let config = ClientConfig::default();
///
/// // Point at a staging deployment with a shorter timeout
/// let config = ClientConfig::default()
///     .with_base_url("https://staging.pxshot.com")
///     .with_timeout_ms(10_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// API root, without the `/v1/...` path (default: `https://api.pxshot.com`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Timeout for connecting and for the whole exchange (default: 30000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: ClientConfig) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
        }
    }

    pub(crate) fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub(crate) fn resolved_timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let config = ClientConfig::default();
        assert_eq!(config.resolved_base_url(), "https://api.pxshot.com");
        assert_eq!(config.resolved_timeout_ms(), 30_000);
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = ClientConfig::default()
            .with_base_url("https://file.example")
            .with_timeout_ms(5_000);
        let flags = ClientConfig::default().with_timeout_ms(1_000);

        let merged = file.merge(flags);
        assert_eq!(merged.base_url.as_deref(), Some("https://file.example"));
        assert_eq!(merged.timeout_ms, Some(1_000));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeoutMs": 1500}"#).unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout_ms, Some(1500));

        let empty: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ClientConfig::default());
    }
}
