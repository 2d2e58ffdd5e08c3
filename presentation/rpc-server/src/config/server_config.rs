use std::env;

/// Listener configuration for the RPC transport and the health endpoint
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
    pub health_port: Option<String>,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: RPC port to bind (default: "3001")
    /// - HEALTH_PORT: HTTP health port; the health server is off when unset
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "3001".to_string());
        let health_port = env::var("HEALTH_PORT").ok().filter(|p| !p.trim().is_empty());

        Self {
            ip,
            port,
            health_port,
        }
    }

    /// Get the RPC bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn health_bind_address(&self) -> Option<String> {
        self.health_port
            .as_ref()
            .map(|port| format!("{}:{}", self.ip, port))
    }
}
