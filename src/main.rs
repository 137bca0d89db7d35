use anyhow::Result;
use astroai::config::{AstroAiConfig, LoggingConfig};
use astroai::web;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("astroai={},info", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AstroAiConfig::load()?;
    init_logging(&config.logging);

    if config.completion.api_key.is_none() {
        tracing::warn!(
            "No completion API key configured, AI readings are disabled for this session"
        );
    }

    web::run(config).await
}
