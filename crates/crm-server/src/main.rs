//! crm-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) layered under
//! `CRM_*` environment variables, builds the in-memory stores and serves the
//! JSON API over HTTP.
//!
//! ```text
//! cargo run -p crm-server --bin server -- --config config.toml
//! CRM_PORT=8080 CRM_SEED_DEMO_DATA=false cargo run -p crm-server --bin server
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use crm_server::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Pharma CRM demo API server")]
struct Cli {
  /// Path to the TOML configuration file. A missing file is not an error.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CRM").try_parsing(true))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let state = AppState::from_config(&server_cfg);
  let customers = state.customers.len().await;
  let visits = state.visits.len().await;
  tracing::info!(customers, visits, "stores ready");

  let app = crm_server::router(state, &server_cfg);
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  tracing::info!("CRM demo API listening on http://{address}");
  tracing::info!(
    "Health check: http://{address}{}/health",
    server_cfg.normalized_prefix()
  );

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  Ok(())
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to install Ctrl-C handler");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
