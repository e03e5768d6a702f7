//! Screenshot and usage operations
//!
//! Each operation is a single request/response exchange. Nothing is retried,
//! cached or queued, and errors are handed back to the caller untouched.

use crate::client::Client;
use crate::error::{map_error_response, PxshotError, Result};
use crate::metrics;
use crate::options::ScreenshotOptions;
use crate::persist;
use crate::request::{screenshot_request, usage_request, ResponseMode};
use crate::response::{ScreenshotOutput, StoredScreenshot, UsageStats};
use crate::transport::{HttpRequest, HttpResponse};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

impl Client {
    /// Capture `options.url`.
    ///
    /// Returns [`ScreenshotOutput::Bytes`] unless `options.store` is set, in
    /// which case the service keeps the image and
    /// [`ScreenshotOutput::Stored`] describes it.
    ///
    /// # Errors
    ///
    /// [`PxshotError::Validation`] without any network traffic when `url` is
    /// empty, [`PxshotError::Api`] for a non-2xx response, and the
    /// transport's error for failures below HTTP.
    pub async fn screenshot(&self, options: ScreenshotOptions) -> Result<ScreenshotOutput> {
        self.capture("screenshot", options).await
    }

    /// Capture and return the image bytes, ignoring any `store` flag.
    pub async fn screenshot_or_throw_bytes(&self, options: ScreenshotOptions) -> Result<Vec<u8>> {
        self.capture_bytes("screenshot_or_throw_bytes", options).await
    }

    /// Same contract as [`Client::screenshot_or_throw_bytes`].
    pub async fn screenshot_bytes(&self, options: ScreenshotOptions) -> Result<Vec<u8>> {
        self.capture_bytes("screenshot_bytes", options).await
    }

    /// Capture with `store` forced on and return the stored screenshot.
    pub async fn screenshot_url(&self, options: ScreenshotOptions) -> Result<StoredScreenshot> {
        let options = ScreenshotOptions {
            store: true,
            ..options
        };

        match self.capture("screenshot_url", options).await? {
            ScreenshotOutput::Stored(stored) => Ok(stored),
            ScreenshotOutput::Bytes(_) => Err(PxshotError::Serialization(
                "stored capture produced an inline image".to_string(),
            )),
        }
    }

    /// Capture the image and write it to `path`, replacing any existing
    /// file. Returns `path` as given.
    pub async fn save_screenshot<P: AsRef<Path>>(
        &self,
        options: ScreenshotOptions,
        path: P,
    ) -> Result<P> {
        let bytes = self.capture_bytes("save_screenshot", options).await?;
        persist::write_bytes(path.as_ref(), &bytes).await?;
        Ok(path)
    }

    /// Fetch account usage for the client's API key.
    pub async fn usage(&self) -> Result<UsageStats> {
        let response = self.send("usage", usage_request(self)).await?;
        UsageStats::from_wire_body(&response.body)
    }

    async fn capture_bytes(
        &self,
        operation: &'static str,
        options: ScreenshotOptions,
    ) -> Result<Vec<u8>> {
        let options = ScreenshotOptions {
            store: false,
            ..options
        };

        match self.capture(operation, options).await? {
            ScreenshotOutput::Bytes(bytes) => Ok(bytes),
            ScreenshotOutput::Stored(_) => Err(PxshotError::Serialization(
                "inline capture produced a stored screenshot".to_string(),
            )),
        }
    }

    async fn capture(
        &self,
        operation: &'static str,
        options: ScreenshotOptions,
    ) -> Result<ScreenshotOutput> {
        if options.url.is_empty() {
            metrics::record_validation_failure(operation);
            return Err(PxshotError::validation("url is required"));
        }

        if let Some(factor) = options.device_scale_factor {
            if !factor.is_finite() {
                metrics::record_validation_failure(operation);
                return Err(PxshotError::validation(format!(
                    "device_scale_factor must be a finite number, got {factor}"
                )));
            }
        }

        let (request, mode) = screenshot_request(self, &options)?;
        let response = self.send(operation, request).await?;

        match mode {
            ResponseMode::Bytes => Ok(ScreenshotOutput::Bytes(response.body)),
            ResponseMode::Stored => Ok(ScreenshotOutput::Stored(
                StoredScreenshot::from_wire_body(&response.body)?,
            )),
        }
    }

    async fn send(&self, operation: &'static str, request: HttpRequest) -> Result<HttpResponse> {
        debug!("Dispatching {} to {}", operation, request.url);
        let started = Instant::now();

        let response = match self.transport().execute(request).await {
            Ok(response) => response,
            Err(err) => {
                metrics::record_transport_failure(operation);
                return Err(err);
            }
        };

        metrics::record_request(operation, response.status, started.elapsed());

        if !response.is_success() {
            return Err(map_error_response(response.status, &response.body));
        }

        Ok(response)
    }
}
