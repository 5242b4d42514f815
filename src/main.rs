//! demo-app: a minimal demonstration web application.
//!
//! This is the application entry point. It loads configuration, initializes
//! tracing, compiles templates, registers health indicators, sets up the Axum
//! router and runs the HTTP server until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demo_app::config::{AppConfig, DEFAULT_LOG_FILTER};
use demo_app::http::start_server;
use demo_app::probe::HealthProbe;
use demo_app::templates::init_templates;
use demo_app::{create_router, AppState};

/// demo-app: a minimal demonstration web application
#[derive(Parser, Debug)]
#[command(name = "demo-app", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "demo_app=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration first so the log format is known
    let config = AppConfig::resolve(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        version = %config.app.version,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let tera = init_templates(&config.ui)?;
    tracing::info!(
        templates = tera.get_template_names().count(),
        dir = %config.ui.templates_dir,
        "Initialized templates"
    );

    let probe = HealthProbe::with_defaults();
    tracing::info!(indicators = ?probe.indicator_names(), "Registered health indicators");

    let http_config = config.http.clone();
    let state = AppState::new(config, tera, probe);
    let app = create_router(state);

    start_server(app, &http_config).await?;

    Ok(())
}
