use clap::Parser;
use receipt_processor::cli::{self, Cli, Commands};
use receipt_processor::config::{Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // for .with() on registry

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Setup logging
    let json = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => cli::handle_serve(&config).await,
        Commands::Score { file } => cli::handle_score(&file),
        Commands::Validate { file } => cli::handle_validate(&file),
        Commands::Config => cli::handle_config_validate(&config),
    }
}
