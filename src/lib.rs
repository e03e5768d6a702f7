//! # Pxshot
//!
//! Async Rust client for the [Pxshot](https://pxshot.com) screenshot API. Capture any
//! public web page as PNG, JPEG or WebP, either inline as bytes or stored by the
//! service behind a temporary URL, and check how much of your plan you have used.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pxshot::{Client, ScreenshotOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("px_live_xxx");
//!
//!     let png = client
//!         .screenshot_bytes(ScreenshotOptions::new("https://example.com"))
//!         .await?;
//!     println!("Screenshot captured: {} bytes", png.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Stored Screenshots
//!
//! ```rust,no_run
//! use pxshot::{Client, ImageFormat, ScreenshotOptions};
//!
//! # async fn example() -> pxshot::Result<()> {
//! let client = Client::new("px_live_xxx");
//!
//! let stored = client
//!     .screenshot_url(
//!         ScreenshotOptions::new("https://example.com")
//!             .with_format(ImageFormat::Webp)
//!             .with_full_page(true),
//!     )
//!     .await?;
//! println!("{} (expires {})", stored.url, stored.expires_at);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use pxshot::{Client, PxshotError, ScreenshotOptions};
//!
//! # async fn example() {
//! let client = Client::new("px_live_xxx");
//!
//! match client.save_screenshot(ScreenshotOptions::new("https://example.com"), "shot.png").await {
//!     Ok(path) => println!("Saved to {path}"),
//!     Err(PxshotError::Api { status_code, message, .. }) => {
//!         eprintln!("API rejected the request ({status_code}): {message}");
//!     }
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! # }
//! ```
//!
//! ## Features
//!
//! - **Typed options**: only options the service understands can be sent
//! - **Result shape fixed up front**: `store` decides bytes vs. stored result
//! - **Shareable client**: immutable, `Clone + Send + Sync`, pooled connections
//! - **Pluggable transport**: swap the HTTP layer through the [`Transport`] trait
//! - **Metrics**: request counters and latencies via the `metrics` facade
//!
//! ## CLI Usage
//!
//! ```bash
//! export PXSHOT_API_KEY=px_live_xxx
//! pxshot capture --url https://example.com --output example.png
//! pxshot batch --input urls.txt --output screenshots/ --concurrency 8
//! pxshot usage
//! ```

/// Key-case conversion between internal and wire field names
pub mod case;

/// Client handle and construction
pub mod client;

/// Client configuration and defaults
pub mod config;

/// Error types and error-response mapping
pub mod error;

/// Request metrics
pub mod metrics;

/// Screenshot and usage operations
pub mod operations;

/// Screenshot request options
pub mod options;

/// Writing captured images to disk
pub mod persist;

/// Request assembly
pub mod request;

/// Response types
pub mod response;

/// HTTP transport abstraction
pub mod transport;

/// Helpers used by the command-line tool
pub mod utils;


pub use case::{from_wire, to_wire, transform_keys};
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use error::{map_error_response, ErrorKind, PxshotError, Result};
pub use options::{ImageFormat, ScreenshotOptions, WaitUntil};
pub use request::ResponseMode;
pub use response::{ScreenshotOutput, StoredScreenshot, UsageStats};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use utils::*;
