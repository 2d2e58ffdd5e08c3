use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Forwards business-layer log lines to `tracing` under the service target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "products_service", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "products_service", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "products_service", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "products_service", "{}", message);
    }
}

/// Installs the fmt subscriber, filtered by `RUST_LOG` (falls back to
/// `default_filter`). Calling it twice is a no-op.
pub fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_tolerate_repeated_initialisation() {
        init_tracing("debug");
        init_tracing("info");

        let logger = TracingLogger;
        logger.info("tracing initialised twice");
    }
}
