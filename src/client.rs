use crate::config::ClientConfig;
use crate::transport::{ReqwestTransport, Transport};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Handle to the Pxshot API
///
/// Holds the credential, base URL and timeout. A client never changes after
/// construction; clone it freely to share across tasks, clones reuse the same
/// connection pool.
///
/// # Examples
///
/// ```rust,no_run
/// use pxshot::{Client, ClientConfig, ScreenshotOptions};
///
/// #[tokio::main]
/// async fn main() -> pxshot::Result<()> {
///     let client = Client::with_config(
///         "px_live_xxx",
///         ClientConfig::default().with_timeout_ms(60_000),
///     );
///
///     let png = client
///         .screenshot_bytes(ScreenshotOptions::new("https://example.com"))
///         .await?;
///     println!("Captured {} bytes", png.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    timeout_ms: u64,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client with default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Self {
        let timeout = Duration::from_millis(config.resolved_timeout_ms());
        Self::with_transport(api_key, config, Arc::new(ReqwestTransport::new(timeout)))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(
        api_key: impl Into<String>,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: config.resolved_base_url(),
            timeout_ms: config.resolved_timeout_ms(),
            transport,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
