use std::sync::Arc;

use account::InMemoryProfileStore;
use anyhow::Result;
use catalog::Catalog;
use clap::{Parser, Subcommand};
use pricing::PricingSchedule;
use tower_http::trace::TraceLayer;

use blendbox::routes::{router, AppState};

/// blendbox - Personalized smoothie subscriptions
#[derive(Parser)]
#[command(name = "blendbox")]
#[command(about = "Weekly smoothie recommendation, packaging and pricing service", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate the catalog, pricing tiers and configuration, then exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = blendbox::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    blendbox::observability::init_observability(
        "blendbox",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Check => check_command(),
    };

    blendbox::observability::shutdown_observability();

    result
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: blendbox::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting blendbox server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    // Static reference data; a malformed entry fails here, not per request.
    let catalog = Catalog::builtin()?;
    tracing::info!(items = catalog.len(), "Catalog loaded");

    let state = AppState {
        config,
        catalog: Arc::new(catalog),
        pricing: Arc::new(PricingSchedule::standard()),
        profile_store: Arc::new(InMemoryProfileStore::new()),
    };

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument]
fn check_command() -> Result<()> {
    tracing::info!("Validating static reference data...");

    let catalog = Catalog::builtin()?;
    tracing::info!(
        items = catalog.len(),
        reference_entries = catalog.reference_entries().len(),
        "Catalog OK"
    );

    let schedule = PricingSchedule::new(pricing::standard_tiers())?;
    tracing::info!(tiers = schedule.tiers().len(), "Pricing tiers OK");

    tracing::info!("All checks passed");
    Ok(())
}
