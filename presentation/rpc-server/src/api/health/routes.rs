use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Store backing the service ("postgres" or "memory")
    pub store: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness endpoint served next to the RPC listener.
///
/// Product operations are only reachable over RPC; this HTTP surface exists
/// for container probes and load balancers.
pub struct Api {
    store: &'static str,
}

impl Api {
    pub fn new(store: &'static str) -> Self {
        Self { store }
    }

    fn report(&self) -> HealthCheckResponse {
        HealthCheckResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            store: self.store.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(self.report())
    }
}
