use std::sync::Arc;
use std::time::Duration;

use poem::{
    EndpointExt, Route, Server as PoemServer, listener::TcpListener as PoemListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::config::app_config::AppConfig;
use crate::rpc::connection::serve_connection;
use crate::rpc::dispatcher::MessageHandler;
use crate::setup::dependency_injection::DependencyContainer;

/// Grace period for in-flight health requests after shutdown starts.
const HEALTH_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

pub struct Server;

impl Server {
    /// Serves RPC (and, when configured, health) traffic until Ctrl+C or
    /// SIGTERM, then releases the store.
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let shutdown = CancellationToken::new();

        let health = config
            .server
            .health_bind_address()
            .map(|addr| Self::spawn_health(addr, container.health_api, shutdown.clone()));

        let addr = config.server.bind_address();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(address = %addr, "Products microservice listening for RPC");

        let signal_token = shutdown.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            signal_token.cancel();
        });

        let handler: Arc<dyn MessageHandler> = container.product_controller;
        let tracker = TaskTracker::new();
        Self::accept_loop(listener, handler, shutdown.clone(), &tracker).await;

        // Requests already read keep the store until their replies are written.
        tracker.close();
        tracing::info!(tasks = tracker.len(), "Waiting for in-flight requests");
        tracker.wait().await;

        if let Some(health) = health {
            match health.await {
                Ok(Err(e)) => tracing::error!(error = %e, "Health server failed"),
                Err(e) => tracing::error!(error = %e, "Health server task panicked"),
                Ok(Ok(())) => {}
            }
        }

        container.store.close().await;
        tracing::info!("Store released, shutdown complete");
        Ok(())
    }

    async fn accept_loop(
        listener: TcpListener,
        handler: Arc<dyn MessageHandler>,
        shutdown: CancellationToken,
        tracker: &TaskTracker,
    ) {
        loop {
            let accepted = tokio::select! {
                _ = shutdown.cancelled() => break,
                accepted = listener.accept() => accepted,
            };

            match accepted {
                Ok((stream, _)) => {
                    tracker.spawn(serve_connection(
                        stream,
                        handler.clone(),
                        shutdown.clone(),
                        tracker.clone(),
                    ));
                }
                Err(e) => tracing::warn!(error = %e, "Failed to accept connection"),
            }
        }
    }

    fn spawn_health(
        addr: String,
        health_api: crate::api::health::routes::Api,
        shutdown: CancellationToken,
    ) -> tokio::task::JoinHandle<std::io::Result<()>> {
        let api_service = OpenApiService::new(
            health_api,
            "Products Microservice",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(Tracing);

        tracing::info!(address = %addr, "Health endpoint at http://{}/health", addr);
        tokio::spawn(async move {
            PoemServer::new(PoemListener::bind(addr))
                .run_with_graceful_shutdown(
                    app,
                    shutdown.cancelled_owned(),
                    Some(HEALTH_SHUTDOWN_GRACE),
                )
                .await
        })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C signal, shutting down gracefully"),
        _ = terminate => tracing::info!("Received SIGTERM signal, shutting down gracefully"),
    }
}
