use std::sync::Arc;

use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config, storage_config::StorageBackend};
use persistence::kv::{
    memory::InMemoryKeyValueStore, postgres::PostgresKeyValueStore, store::KeyValueStore,
};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Pantry API entry point
///
/// Loads configuration, opens the key-value store, wires the use cases and
/// starts the HTTP server.
/// - config/: environment configuration (server, CORS, storage, auth, OpenAI)
/// - setup/: dependency injection and server setup
/// - api/: route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Open storage
    let store: Arc<dyn KeyValueStore> = match &config.storage {
        StorageBackend::Postgres {
            database_url,
            migrations_path,
        } => {
            let pool = database_config::init_database(database_url, migrations_path).await?;
            Arc::new(PostgresKeyValueStore::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    // 5. Wire dependencies
    let container = DependencyContainer::new(store, &config.openai);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
