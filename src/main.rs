use std::sync::Arc;

use clap::Parser;
use herald::{
    config::AppConfig, http_client::create_retryable_http_client, notifier::DiscordNotifier,
    persistence::JsonFileStore, providers::YouTubeSource, supervisor::Supervisor,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding app.yaml and feeds.yaml.
    #[arg(long, default_value = "configs")]
    config_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    run(&cli.config_dir).await
}

async fn run(config_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!("Loading application configuration...");
    let config = AppConfig::new(Some(config_dir))?;
    tracing::debug!(
        channel_id = %config.channel_id,
        poll_interval = ?config.poll_interval_secs,
        state_file = %config.state_file.display(),
        "Configuration loaded."
    );

    let http_client = Arc::new(create_retryable_http_client(
        &config.http_retry_config,
        &config.http_base_config,
    )?);
    tracing::info!(retry_policy = ?config.http_retry_config, "HTTP client initialized with retry policy.");

    let source = YouTubeSource::new(
        Arc::clone(&http_client),
        config.youtube_api_base.clone(),
        config.youtube_api_key.clone(),
    );
    let notifier = DiscordNotifier::new(
        Arc::clone(&http_client),
        config.discord_api_base.clone(),
        config.discord_bot_token.clone(),
        config.channel_id.clone(),
    );
    let store = JsonFileStore::new(config.state_file.clone());

    let supervisor = Supervisor::builder()
        .config(config)
        .source(Arc::new(source))
        .notifier(Arc::new(notifier))
        .store(Arc::new(store))
        .build()?;

    tracing::info!("Supervisor initialized, starting to watch feeds...");

    supervisor.run().await?;

    Ok(())
}
