//! Values returned by the screenshot and usage operations

use crate::case::{from_wire, transform_keys};
use crate::error::{PxshotError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of [`Client::screenshot`](crate::Client::screenshot)
///
/// The variant always matches the `store` flag of the request: `Bytes` when
/// it was false, `Stored` when it was true.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenshotOutput {
    /// Encoded image returned inline
    Bytes(Vec<u8>),
    /// Image persisted by the service
    Stored(StoredScreenshot),
}

impl ScreenshotOutput {
    pub fn is_stored(&self) -> bool {
        matches!(self, ScreenshotOutput::Stored(_))
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ScreenshotOutput::Bytes(bytes) => Some(bytes),
            ScreenshotOutput::Stored(_) => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            ScreenshotOutput::Bytes(bytes) => Some(bytes),
            ScreenshotOutput::Stored(_) => None,
        }
    }

    pub fn into_stored(self) -> Option<StoredScreenshot> {
        match self {
            ScreenshotOutput::Stored(stored) => Some(stored),
            ScreenshotOutput::Bytes(_) => None,
        }
    }
}

/// A screenshot kept by the service and reachable at `url` until `expires_at`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredScreenshot {
    pub url: String,
    pub expires_at: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: u64,
    /// Any further fields the service returned, keys in internal case
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoredScreenshot {
    /// Parse `expires_at` as an RFC 3339 timestamp.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expires_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub(crate) fn from_wire_body(body: &[u8]) -> Result<Self> {
        let map = decode_wire_object(body)?;
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

/// Account consumption as reported by the service
///
/// The shape is owned by the service; keys are converted to internal case
/// and values passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UsageStats(Map<String, Value>);

impl UsageStats {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub(crate) fn from_wire_body(body: &[u8]) -> Result<Self> {
        decode_wire_object(body).map(UsageStats)
    }
}

impl From<Map<String, Value>> for UsageStats {
    fn from(map: Map<String, Value>) -> Self {
        UsageStats(map)
    }
}

fn decode_wire_object(body: &[u8]) -> Result<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(transform_keys(map, from_wire)),
        other => Err(PxshotError::Serialization(format!(
            "expected a JSON object in response body, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_stored_screenshot_from_wire() {
        let body = br#"{
            "url": "https://cdn.pxshot.com/abc.png",
            "expires_at": "2026-10-18T12:00:00Z",
            "width": 1920,
            "height": 1080,
            "size_bytes": 48213
        }"#;

        let stored = StoredScreenshot::from_wire_body(body).unwrap();
        assert_eq!(stored.url, "https://cdn.pxshot.com/abc.png");
        assert_eq!(stored.expires_at, "2026-10-18T12:00:00Z");
        assert_eq!(stored.width, 1920);
        assert_eq!(stored.height, 1080);
        assert_eq!(stored.size_bytes, 48213);
        assert!(stored.extra.is_empty());

        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://cdn.pxshot.com/abc.png",
                "expiresAt": "2026-10-18T12:00:00Z",
                "width": 1920,
                "height": 1080,
                "sizeBytes": 48213
            })
        );
    }

    #[test]
    fn test_stored_screenshot_keeps_extra_fields() {
        let body = br#"{"url":"u","expires_at":"x","width":1,"height":2,"size_bytes":3,"storage_region":"eu"}"#;
        let stored = StoredScreenshot::from_wire_body(body).unwrap();
        assert_eq!(stored.extra.get("storageRegion"), Some(&json!("eu")));
    }

    #[test]
    fn test_expires_at_parsing() {
        let body = br#"{"url":"u","expires_at":"2026-10-18T12:00:00Z","width":1,"height":1,"size_bytes":1}"#;
        let stored = StoredScreenshot::from_wire_body(body).unwrap();
        let parsed = stored.expires_at_utc().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-10-18T12:00:00+00:00");

        let bad = StoredScreenshot {
            expires_at: "tomorrow".to_string(),
            ..stored
        };
        assert!(bad.expires_at_utc().is_none());
    }

    #[test]
    fn test_usage_stats_keys_converted() {
        let body = br#"{"plan_name":"pro","screenshots_used":12,"limits":{"per_month":1000}}"#;
        let usage = UsageStats::from_wire_body(body).unwrap();

        assert_eq!(usage.get("planName"), Some(&json!("pro")));
        assert_eq!(usage.get("screenshotsUsed"), Some(&json!(12)));
        assert_eq!(usage.get("limits"), Some(&json!({ "per_month": 1000 })));
        assert_eq!(usage.len(), 3);
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let err = UsageStats::from_wire_body(b"[1,2,3]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
        assert!(err.to_string().contains("array"));

        let err = StoredScreenshot::from_wire_body(b"not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

    #[test]
    fn test_output_accessors() {
        let bytes = ScreenshotOutput::Bytes(vec![1, 2, 3]);
        assert!(!bytes.is_stored());
        assert_eq!(bytes.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert!(bytes.clone().into_stored().is_none());
        assert_eq!(bytes.into_bytes(), Some(vec![1, 2, 3]));
    }
}
