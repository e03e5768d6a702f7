//! Request assembly for each API operation

use crate::case::{to_wire, transform_keys};
use crate::client::Client;
use crate::error::{PxshotError, Result};
use crate::options::ScreenshotOptions;
use crate::transport::HttpRequest;
use reqwest::Method;
use serde_json::Value;

pub const SCREENSHOT_PATH: &str = "/v1/screenshot";
pub const USAGE_PATH: &str = "/v1/usage";

/// How a successful response body is decoded
///
/// Fixed from the request's `store` flag before the call goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Raw image bytes
    Bytes,
    /// JSON description of a stored screenshot
    Stored,
}

impl ResponseMode {
    pub fn for_options(options: &ScreenshotOptions) -> Self {
        if options.store {
            ResponseMode::Stored
        } else {
            ResponseMode::Bytes
        }
    }
}

/// Build the `POST /v1/screenshot` request and pick its decode mode.
pub fn screenshot_request(
    client: &Client,
    options: &ScreenshotOptions,
) -> Result<(HttpRequest, ResponseMode)> {
    let body = match serde_json::to_value(options)? {
        Value::Object(map) => Value::Object(transform_keys(map, to_wire)),
        _ => {
            return Err(PxshotError::Serialization(
                "screenshot options did not serialize to an object".to_string(),
            ))
        }
    };

    let request = HttpRequest {
        method: Method::POST,
        url: endpoint(client.base_url(), SCREENSHOT_PATH),
        headers: default_headers(client),
        body: Some(serde_json::to_vec(&body)?),
        timeout: client.timeout(),
    };

    Ok((request, ResponseMode::for_options(options)))
}

/// Build the `GET /v1/usage` request.
pub fn usage_request(client: &Client) -> HttpRequest {
    HttpRequest {
        method: Method::GET,
        url: endpoint(client.base_url(), USAGE_PATH),
        headers: default_headers(client),
        body: None,
        timeout: client.timeout(),
    }
}

fn default_headers(client: &Client) -> Vec<(&'static str, String)> {
    vec![
        ("Authorization", format!("Bearer {}", client.api_key())),
        ("Content-Type", "application/json".to_string()),
        ("Accept", "application/json".to_string()),
    ]
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::options::{ImageFormat, WaitUntil};
    use serde_json::json;
    use std::time::Duration;

    fn test_client() -> Client {
        Client::with_config(
            "px_test",
            ClientConfig::default()
                .with_base_url("https://api.example.test/")
                .with_timeout_ms(1_234),
        )
    }

    fn body_json(request: &HttpRequest) -> Value {
        serde_json::from_slice(request.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_screenshot_request_shape() {
        let client = test_client();
        let options = ScreenshotOptions::new("https://example.com")
            .with_format(ImageFormat::Png)
            .with_full_page(true)
            .with_wait_for_selector("#main")
            .with_wait_for_timeout_ms(500)
            .with_device_scale_factor(2.0)
            .with_block_ads(true)
            .with_wait_until(WaitUntil::Load);

        let (request, mode) = screenshot_request(&client, &options).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://api.example.test/v1/screenshot");
        assert_eq!(request.timeout, Duration::from_millis(1_234));
        assert_eq!(mode, ResponseMode::Bytes);
        assert_eq!(
            body_json(&request),
            json!({
                "url": "https://example.com",
                "format": "png",
                "full_page": true,
                "wait_until": "load",
                "wait_for_selector": "#main",
                "wait_for_timeout_ms": 500,
                "device_scale_factor": 2.0,
                "block_ads": true
            })
        );
    }

    #[test]
    fn test_store_selects_stored_mode() {
        let client = test_client();
        let options = ScreenshotOptions::new("https://example.com").with_store(true);

        let (request, mode) = screenshot_request(&client, &options).unwrap();
        assert_eq!(mode, ResponseMode::Stored);
        assert_eq!(body_json(&request)["store"], json!(true));
    }

    #[test]
    fn test_headers_present_on_every_request() {
        let client = test_client();
        let (screenshot, _) =
            screenshot_request(&client, &ScreenshotOptions::new("https://example.com")).unwrap();
        let usage = usage_request(&client);

        for request in [&screenshot, &usage] {
            assert_eq!(request.header("Authorization"), Some("Bearer px_test"));
            assert_eq!(request.header("Content-Type"), Some("application/json"));
            assert_eq!(request.header("Accept"), Some("application/json"));
        }
    }

    #[test]
    fn test_usage_request_shape() {
        let request = usage_request(&test_client());
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.example.test/v1/usage");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(endpoint("https://a.test", USAGE_PATH), "https://a.test/v1/usage");
        assert_eq!(endpoint("https://a.test//", USAGE_PATH), "https://a.test/v1/usage");
    }
}
