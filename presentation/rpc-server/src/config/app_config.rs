use business::domain::pagination::PaginationConfig;

use super::{database_config::StoreConfig, pagination_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub pagination: PaginationConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            store: StoreConfig::from_env()?,
            pagination: pagination_config::from_env(),
        })
    }
}
