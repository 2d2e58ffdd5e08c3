use dotenvy::dotenv;

mod api;
mod config;
mod rpc;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Products microservice entry point
///
/// Loads configuration, acquires the product store, wires the use cases and
/// serves them over the RPC transport:
/// - config/: listener, store and pagination settings
/// - setup/: dependency injection and server lifecycle
/// - rpc/: socket framing, message dispatch and product handlers
/// - api/: HTTP health endpoint
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    logger::init_tracing("info");

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Acquire the store for the lifetime of the process
    let store = database_config::init_store(&config.store).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(store, config.pagination);

    // 6. Serve until shutdown, then release the store
    Server::run(config, container).await
}
