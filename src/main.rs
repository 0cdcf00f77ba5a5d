//! Application entry point. Initializes tracing, loads configuration
//! from environment variables, sets up templates and the Axum router,
//! and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podling::config::{Config, DEFAULT_LOG_FILTER};
use podling::routes::create_router;
use podling::server::start_server;
use podling::state::AppState;
use podling::templates::init_templates;

/// podling: a demonstration web service for container orchestration
#[derive(Parser, Debug)]
#[command(name = "podling", version, about)]
struct Args {
    /// Log level filter (e.g., "podling=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        app_name = %config.app_name,
        version = %config.app_version,
        environment = %config.environment,
        debug = config.debug,
        "Loaded configuration"
    );

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    let addr = config.bind_addr()?;
    let state = AppState::new(config, tera);
    let app = create_router(state);

    start_server(app, addr).await?;

    Ok(())
}
