mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{setup_logging, Cli, CliRunner};
use pxshot::{Client, ClientConfig};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    info!("Starting pxshot v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args).await?;
    let client = Client::with_config(args.api_key.clone(), config);
    debug!("Using {:?}", client);

    CliRunner::new(client).run(args.command).await
}

async fn load_config(args: &Cli) -> Result<ClientConfig> {
    let file_config = if let Some(config_path) = &args.config {
        let content = tokio::fs::read_to_string(config_path)
            .await
            .with_context(|| format!("reading config {}", config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", config_path.display()))?
    } else {
        ClientConfig::default()
    };

    let flag_config = ClientConfig {
        base_url: args.base_url.clone(),
        timeout_ms: args.timeout_ms,
    };

    let config = file_config.merge(flag_config);
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ClientConfig) -> Result<()> {
    if config.timeout_ms == Some(0) {
        anyhow::bail!("Timeout must be greater than 0");
    }

    if let Some(base_url) = &config.base_url {
        pxshot::validate_url(base_url).map_err(anyhow::Error::msg)?;
    }

    Ok(())
}
