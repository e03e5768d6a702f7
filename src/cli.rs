use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use futures::stream::{self, StreamExt};
use pxshot::{
    batch_filenames, format_bytes, validate_url, Client, ImageFormat, ScreenshotOptions,
    WaitUntil,
};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "pxshot")]
#[command(about = "Capture web page screenshots through the Pxshot API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, env = "PXSHOT_API_KEY", hide_env_values = true, help = "API key (px_...)")]
    pub api_key: String,

    #[arg(long, help = "API base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Request timeout in milliseconds")]
    pub timeout_ms: Option<u64>,

    #[arg(long, help = "JSON configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Capture a single page and save it to a file
    Capture {
        #[arg(short, long, help = "Output file path")]
        output: PathBuf,

        #[command(flatten)]
        capture: CaptureArgs,
    },

    /// Capture a page, let the service store it, and print the result
    Store {
        #[command(flatten)]
        capture: CaptureArgs,
    },

    /// Capture every URL listed in a file
    Batch {
        #[arg(short, long, help = "Input file containing URLs (one per line)")]
        input: PathBuf,

        #[arg(short, long, help = "Output directory for screenshots")]
        output: PathBuf,

        #[arg(short, long, default_value = "4", help = "Concurrent requests")]
        concurrency: usize,

        #[command(flatten)]
        options: RenderArgs,
    },

    /// Show account usage
    Usage,
}

#[derive(Args, Debug, Clone)]
pub struct CaptureArgs {
    #[arg(short, long, help = "URL to capture")]
    pub url: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    #[arg(long, help = "Image format (png, jpeg, webp)")]
    pub format: Option<ImageFormat>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100), help = "JPEG/WebP quality (1-100)")]
    pub quality: Option<u8>,

    #[arg(long, help = "Viewport width")]
    pub width: Option<u32>,

    #[arg(long, help = "Viewport height")]
    pub height: Option<u32>,

    #[arg(long, help = "Capture the full scrollable page")]
    pub full_page: bool,

    #[arg(long, help = "Wait condition (load, domcontentloaded, networkidle)")]
    pub wait_until: Option<WaitUntil>,

    #[arg(long, help = "CSS selector to wait for before capturing")]
    pub selector: Option<String>,

    #[arg(long, help = "Extra wait in milliseconds before capturing")]
    pub wait: Option<u64>,

    #[arg(long, help = "Device scale factor")]
    pub scale: Option<f64>,

    #[arg(long, help = "Block ads while rendering")]
    pub block_ads: bool,
}

impl RenderArgs {
    pub fn to_options(&self, url: impl Into<String>) -> ScreenshotOptions {
        ScreenshotOptions {
            url: url.into(),
            format: self.format,
            quality: self.quality,
            width: self.width,
            height: self.height,
            full_page: self.full_page.then_some(true),
            wait_until: self.wait_until,
            wait_for_selector: self.selector.clone(),
            wait_for_timeout_ms: self.wait,
            device_scale_factor: self.scale,
            store: false,
            block_ads: self.block_ads.then_some(true),
        }
    }
}

pub struct CliRunner {
    pub client: Client,
}

impl CliRunner {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Capture { output, capture } => self.run_capture(capture, output).await,
            Commands::Store { capture } => self.run_store(capture).await,
            Commands::Batch {
                input,
                output,
                concurrency,
                options,
            } => self.run_batch(&input, &output, concurrency, &options).await,
            Commands::Usage => self.run_usage().await,
        }
    }

    pub async fn run_capture(&self, capture: CaptureArgs, output: PathBuf) -> Result<()> {
        validate_url(&capture.url).map_err(anyhow::Error::msg)?;
        info!("Capturing {}", capture.url);

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let options = capture.render.to_options(&capture.url);
        let path = self.client.save_screenshot(options, output).await?;
        let size = fs::metadata(&path).await.map(|m| m.len() as usize).unwrap_or(0);

        println!("Screenshot captured successfully:");
        println!("  URL: {}", capture.url);
        println!("  Output: {}", path.display());
        println!("  Size: {}", format_bytes(size));

        Ok(())
    }

    pub async fn run_store(&self, capture: CaptureArgs) -> Result<()> {
        validate_url(&capture.url).map_err(anyhow::Error::msg)?;
        info!("Capturing {} (stored)", capture.url);

        let stored = self
            .client
            .screenshot_url(capture.render.to_options(&capture.url))
            .await?;

        println!("{}", serde_json::to_string_pretty(&stored)?);
        Ok(())
    }

    pub async fn run_batch(
        &self,
        input: &Path,
        output: &Path,
        concurrency: usize,
        options: &RenderArgs,
    ) -> Result<()> {
        if concurrency == 0 {
            bail!("concurrency must be greater than 0");
        }

        let urls = read_urls_from_file(input).await?;
        info!("Loaded {} URLs from {}", urls.len(), input.display());

        fs::create_dir_all(output)
            .await
            .with_context(|| format!("creating {}", output.display()))?;

        let filenames = batch_filenames(&urls, options.format);

        let results: Vec<(String, pxshot::Result<PathBuf>)> =
            stream::iter(urls.into_iter().zip(filenames))
                .map(|(url, filename)| {
                    let path = output.join(filename);
                    let request = options.to_options(url.clone());
                    async move { (url, self.client.save_screenshot(request, path).await) }
                })
                .buffer_unordered(concurrency)
                .collect()
                .await;

        let mut success_count = 0;
        let mut error_count = 0;

        for (url, result) in results {
            match result {
                Ok(path) => {
                    success_count += 1;
                    info!("Saved screenshot: {}", path.display());
                }
                Err(e) => {
                    error_count += 1;
                    warn!("Failed to capture {}: {}", url, e);
                }
            }
        }

        println!("Batch completed. Success: {success_count}, Errors: {error_count}");

        if error_count > 0 && success_count == 0 {
            error!("Every capture in the batch failed");
            bail!("all {error_count} captures failed");
        }

        Ok(())
    }

    pub async fn run_usage(&self) -> Result<()> {
        let usage = self.client.usage().await?;
        println!("{}", serde_json::to_string_pretty(&usage)?);
        Ok(())
    }
}

/// Read URLs one per line, skipping blanks, `#` comments and invalid entries.
pub async fn read_urls_from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    let urls = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| match validate_url(line) {
            Ok(_) => true,
            Err(e) => {
                warn!("Skipping {}", e);
                false
            }
        })
        .map(str::to_string)
        .collect();

    Ok(urls)
}

pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
