use anyhow::Context;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::adapters::build_store;
use crate::config::Config;
use crate::domain::ReceiptPayload;
use crate::validation::validate_receipt;
use crate::{create_app, points, AppState};

#[derive(Parser)]
#[command(name = "receipt-processor")]
#[command(about = "Receipt Processor - scores retail receipts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Validate a receipt JSON file and print its points
    Score {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Validate a receipt JSON file
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Configuration validation
    Config,
}

pub async fn handle_serve(config: &Config) -> anyhow::Result<()> {
    let store = build_store(config).await?;
    tracing::info!(store = store.backend(), "Receipt store initialized");

    let app = create_app(AppState { store });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

fn read_payload(file: &Path) -> anyhow::Result<ReceiptPayload> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a receipt", file.display()))
}

pub fn handle_score(file: &Path) -> anyhow::Result<()> {
    let receipt = validate_receipt(&read_payload(file)?)?;
    let breakdown = points::breakdown(&receipt);

    println!("Points: {}", breakdown.total());
    println!("  Retailer name:     {}", breakdown.retailer_name);
    println!("  Round dollar:      {}", breakdown.round_dollar);
    println!("  Multiple of 0.25:  {}", breakdown.quarter_multiple);
    println!("  Item pairs:        {}", breakdown.item_pairs);
    println!("  Item descriptions: {}", breakdown.item_descriptions);
    println!("  Odd day:           {}", breakdown.odd_day);
    println!("  2pm-4pm:           {}", breakdown.afternoon);

    Ok(())
}

pub fn handle_validate(file: &Path) -> anyhow::Result<()> {
    match validate_receipt(&read_payload(file)?) {
        Ok(receipt) => {
            println!("✓ Receipt is valid ({} items)", receipt.items.len());
            Ok(())
        }
        Err(e) => {
            println!("✗ Receipt is invalid: {}", e);
            anyhow::bail!("validation failed")
        }
    }
}

pub fn handle_config_validate(config: &Config) -> anyhow::Result<()> {
    println!("Configuration:");
    println!("  Server port: {}", config.server_port);
    println!(
        "  Store: {}",
        config.database_url.as_deref().unwrap_or("in-memory")
    );
    println!("  Log format: {:?}", config.log_format);
    println!("✓ Configuration is valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_receipt(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const VALID: &str = r#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01",
        "items":[{"shortDescription":"Mountain Dew 12PK","price":"6.49"}],"total":"6.49"}"#;

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["receipt-processor", "score", "receipt.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Score { file }) if file == Path::new("receipt.json")));

        let cli = Cli::try_parse_from(["receipt-processor"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn scores_and_validates_file() {
        let file = write_receipt(VALID);
        assert!(handle_score(file.path()).is_ok());
        assert!(handle_validate(file.path()).is_ok());
    }

    #[test]
    fn invalid_file_fails_validation() {
        let file = write_receipt(&VALID.replace("6.49\"}", "6.4\"}"));
        assert!(handle_validate(file.path()).is_err());
        assert!(handle_score(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(handle_validate(Path::new("/definitely/not/here.json")).is_err());
    }
}
