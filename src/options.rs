//! Screenshot request options
//!
//! [`ScreenshotOptions`] is the complete set of options the service accepts.
//! Unset optional fields are left out of the request body so the server
//! applies its own defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image encoding produced by the service (server default: PNG)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Webp => "webp",
        };
        f.write_str(name)
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "webp" => Ok(ImageFormat::Webp),
            other => Err(format!("unknown image format '{other}' (expected png, jpeg or webp)")),
        }
    }
}

/// Page lifecycle event the renderer waits for before capturing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum WaitUntil {
    #[serde(rename = "load")]
    Load,
    #[serde(rename = "domcontentloaded")]
    DomContentLoaded,
    #[serde(rename = "networkidle")]
    NetworkIdle,
}

impl fmt::Display for WaitUntil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WaitUntil::Load => "load",
            WaitUntil::DomContentLoaded => "domcontentloaded",
            WaitUntil::NetworkIdle => "networkidle",
        };
        f.write_str(name)
    }
}

impl FromStr for WaitUntil {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "load" => Ok(WaitUntil::Load),
            "domcontentloaded" => Ok(WaitUntil::DomContentLoaded),
            "networkidle" => Ok(WaitUntil::NetworkIdle),
            other => Err(format!(
                "unknown wait condition '{other}' (expected load, domcontentloaded or networkidle)"
            )),
        }
    }
}

/// Options for a single capture
///
/// Serializes with internal (camelCase) keys; the request builder converts
/// them to wire case before sending.
///
/// # Examples
///
/// ```rust
/// use pxshot::{ImageFormat, ScreenshotOptions, WaitUntil};
///
/// let options = ScreenshotOptions::new("https://example.com")
///     .with_format(ImageFormat::Webp)
///     .with_viewport(1280, 720)
///     .with_full_page(true)
///     .with_wait_until(WaitUntil::NetworkIdle);
///
/// assert!(!options.store);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotOptions {
    /// Page to capture. Required; an empty string is rejected locally.
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,

    /// Lossy encoder quality, 1-100 (server default: 80)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,

    /// Viewport width in pixels (server default: 1920)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Viewport height in pixels (server default: 1080)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<WaitUntil>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,

    /// Extra delay after the page is ready
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for_timeout_ms: Option<u64>,

    /// Device pixel ratio (server default: 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_scale_factor: Option<f64>,

    /// Persist the image on the service and return its URL instead of the
    /// bytes. Only sent when true.
    #[serde(default, skip_serializing_if = "is_false")]
    pub store: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_ads: Option<bool>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ScreenshotOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_full_page(mut self, full_page: bool) -> Self {
        self.full_page = Some(full_page);
        self
    }

    pub fn with_wait_until(mut self, wait_until: WaitUntil) -> Self {
        self.wait_until = Some(wait_until);
        self
    }

    pub fn with_wait_for_selector(mut self, selector: impl Into<String>) -> Self {
        self.wait_for_selector = Some(selector.into());
        self
    }

    pub fn with_wait_for_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.wait_for_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_device_scale_factor(mut self, factor: f64) -> Self {
        self.device_scale_factor = Some(factor);
        self
    }

    pub fn with_store(mut self, store: bool) -> Self {
        self.store = store;
        self
    }

    pub fn with_block_ads(mut self, block_ads: bool) -> Self {
        self.block_ads = Some(block_ads);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_are_omitted() {
        let value = serde_json::to_value(ScreenshotOptions::new("https://example.com")).unwrap();
        assert_eq!(value, json!({ "url": "https://example.com" }));
    }

    #[test]
    fn test_store_only_serialized_when_true() {
        let stored = serde_json::to_value(ScreenshotOptions::new("u").with_store(true)).unwrap();
        assert_eq!(stored.get("store"), Some(&json!(true)));

        let unstored = serde_json::to_value(ScreenshotOptions::new("u").with_store(false)).unwrap();
        assert!(unstored.get("store").is_none());
    }

    #[test]
    fn test_enum_names() {
        let options = ScreenshotOptions::new("u")
            .with_format(ImageFormat::Jpeg)
            .with_wait_until(WaitUntil::DomContentLoaded);
        let value = serde_json::to_value(options).unwrap();

        assert_eq!(value["format"], json!("jpeg"));
        assert_eq!(value["waitUntil"], json!("domcontentloaded"));
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("JPG".parse::<ImageFormat>(), Ok(ImageFormat::Jpeg));
        assert_eq!("webp".parse::<ImageFormat>(), Ok(ImageFormat::Webp));
        assert!("gif".parse::<ImageFormat>().is_err());

        assert_eq!("networkidle".parse::<WaitUntil>(), Ok(WaitUntil::NetworkIdle));
        assert!("idle".parse::<WaitUntil>().is_err());
    }

    #[test]
    fn test_default_options() {
        let options = ScreenshotOptions::default();
        assert!(options.url.is_empty());
        assert!(!options.store);
        assert!(options.format.is_none());
        assert!(options.device_scale_factor.is_none());
    }
}
