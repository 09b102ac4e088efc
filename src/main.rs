//! acme-stores binary
//!
//! Usage: `acme-stores [CONFIG_FILE]`. Without an argument the file named by
//! `ACME_CONFIG` is used, and without that the built-in defaults.

use acme::config::ServiceConfig;
use acme::logging;
use acme::server::ServerBuilder;
use acme::storage;
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args().nth(1);
    let config = ServiceConfig::load(path.as_deref())?;
    logging::init_logging(&config.logging)?;

    let repository = storage::open_repository(&config.storage).await?;
    tracing::info!(backend = %config.storage.backend, "Storage ready");

    let seeded = storage::seed(repository.as_ref(), &config.seed).await?;
    if seeded > 0 {
        tracing::info!(count = seeded, "Seed stores loaded");
    }

    let addr = config.socket_addr()?;
    ServerBuilder::new()
        .with_shared_repository(repository)
        .with_cors(config.server.cors)
        .serve(&addr.to_string())
        .await
}
