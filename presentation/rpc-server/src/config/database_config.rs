use std::env;
use std::sync::Arc;

use anyhow::{Context, bail};
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::InMemoryProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;
use sqlx::PgPool;

/// Which product store backs the service
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Postgres {
        database: DatabaseConfig,
        migrations: Option<String>,
    },
    Memory,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - STORE_DRIVER: "postgres" (default) or "memory"
    /// - DATABASE_URL: PostgreSQL connection string (required for postgres)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - DATABASE_MIGRATIONS: migrations directory, applied at startup when set
    ///
    /// # Errors
    /// Returns error for an unknown driver or a missing DATABASE_URL
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let driver = lookup("STORE_DRIVER").unwrap_or_else(|| "postgres".to_string());

        match driver.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreConfig::Memory),
            "postgres" => {
                let url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
                    None => DatabaseConfig::DEFAULT_MAX_CONNECTIONS,
                };

                Ok(StoreConfig::Postgres {
                    database: DatabaseConfig::new(url).with_max_connections(max_connections),
                    migrations: lookup("DATABASE_MIGRATIONS"),
                })
            }
            other => bail!("unsupported STORE_DRIVER: {other}"),
        }
    }
}

/// Store handle acquired once at startup and released on shutdown
pub enum StoreHandle {
    Postgres(PgPool),
    Memory(Arc<InMemoryProductRepository>),
}

impl StoreHandle {
    pub fn product_repository(&self) -> Arc<dyn ProductRepository> {
        match self {
            StoreHandle::Postgres(pool) => Arc::new(ProductRepositoryPostgres::new(pool.clone())),
            StoreHandle::Memory(repository) => repository.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreHandle::Postgres(_) => "postgres",
            StoreHandle::Memory(_) => "memory",
        }
    }

    pub async fn close(&self) {
        if let StoreHandle::Postgres(pool) = self {
            pool.close().await;
        }
    }
}

/// Connects the configured store, running migrations when requested
pub async fn init_store(config: &StoreConfig) -> anyhow::Result<StoreHandle> {
    match config {
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory product store; data is lost on shutdown");
            Ok(StoreHandle::Memory(Arc::new(InMemoryProductRepository::new())))
        }
        StoreConfig::Postgres {
            database,
            migrations,
        } => {
            let pool = create_postgres_pool(database).await?;
            tracing::info!("Database connected.");

            if let Some(path) = migrations {
                run_migrations(&pool, path).await?;
                tracing::info!(path = %path, "Database migrations applied");
            }

            Ok(StoreHandle::Postgres(pool))
        }
    }
}
