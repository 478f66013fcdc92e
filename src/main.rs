//! Sales dashboard API — service entry point
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Init tracing
//!   3. Build config from the environment
//!   4. Load the record collection (fatal on failure)
//!   5. Select the AI provider
//!   6. Serve until Ctrl+C / SIGTERM

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use salesdash::ai;
use salesdash::config::AppConfig;
use salesdash::data;
use salesdash::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional — ignore a missing file.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salesdash=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env().context("failed to read configuration")?;

    let records = data::load(&config.data_file_path)
        .with_context(|| format!("failed to load data file '{}'", config.data_file_path))?;
    info!(
        count = records.len(),
        path = %config.data_file_path,
        "record collection loaded"
    );

    let ai = ai::provider_from_config(&config).context("failed to build AI provider")?;

    let state = AppState {
        records: Arc::new(records),
        ai,
    };
    let app = server::build_router(state, config.allowed_origins.clone());

    server::serve(app, &config.bind_addr).await
}
