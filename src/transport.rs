//! HTTP transport used by [`Client`](crate::Client)
//!
//! The library only needs one exchange per operation, so the seam is a single
//! async method. [`ReqwestTransport`] is the production implementation; tests
//! substitute their own.

use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::time::Duration;
use tracing::{debug, trace, warn};

pub const USER_AGENT: &str = concat!("pxshot-rust/", env!("CARGO_PKG_VERSION"));

/// A fully assembled request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request/response exchange. Failures below HTTP (DNS,
    /// connect, timeout) come back as the transport's own error.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose connect phase is bounded by `timeout`.
    ///
    /// The total-exchange bound is applied per request from
    /// [`HttpRequest::timeout`].
    ///
    /// If the configured client cannot be built, a warning is logged and a
    /// default `reqwest::Client` is used; the per-request timeout still holds.
    pub fn new(timeout: Duration) -> Self {
        let http = build_http_client(timeout).unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        });

        Self { http }
    }

    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

/// Build the pooled client with connect timeout, total timeout and user agent.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(timeout)
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .http
            .request(request.method, &request.url)
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        if let Some(body) = request.body {
            trace!("Request body: {} bytes", body.len());
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?.to_vec();

        debug!("Response status {} ({} bytes)", status, body.len());

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
