//! Roster HTTP server
//!
//! Usage: `roster-server [config.yaml]`. Without an argument the path is read
//! from `ROSTER_CONFIG`; without either, defaults are used.

use anyhow::Result;
use roster::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args().nth(1);
    let config = RosterConfig::load(path.as_deref())?;

    ServerBuilder::new()
        .with_store(InMemoryPlayerStore::new())
        .with_config(config)
        .serve()
        .await
}
