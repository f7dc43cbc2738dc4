//! Server startup and shutdown logic

use anyhow::Result;
use axum::Router;
use faultline_interfaces::{RandomSource, RepositoryFactory};
use faultline_rest_api::{create_rest_app, AppConfig, AppContext, FastrandSource};
use faultline_storage::InMemoryRepositoryFactory;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::ServerConfig;

/// Server application struct
pub struct Server {
    config: ServerConfig,
    context: AppContext,
}

impl Server {
    /// Create a new server instance with a fresh in-memory store
    pub fn new(config: ServerConfig) -> Self {
        let repositories: Arc<dyn RepositoryFactory> = if config.api.seed_data {
            Arc::new(InMemoryRepositoryFactory::seeded())
        } else {
            Arc::new(InMemoryRepositoryFactory::new())
        };

        let random: Arc<dyn RandomSource> = match config.faults.random_seed {
            Some(seed) => Arc::new(FastrandSource::with_seed(seed)),
            None => Arc::new(FastrandSource::new()),
        };

        let context = AppContext::new(repositories, random)
            .with_limits(config.faults.limits())
            .with_api_version(config.api.version.clone());

        Self { config, context }
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        let app_config = AppConfig {
            enable_cors: self.config.server.enable_cors,
            enable_request_id: self.config.server.enable_request_id,
            enable_tracing: self.config.server.enable_tracing,
            ..AppConfig::default()
        };

        create_rest_app(self.context.clone(), app_config)
    }

    /// Bind the configured address and serve until a shutdown signal
    pub async fn start(self) -> Result<()> {
        let addr = self.config.server.bind_address;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        self.log_config_summary();
        tracing::info!("Starting Faultline server on {}", listener.local_addr()?);

        let app = self.build_app();
        let grace = Duration::from_secs(self.config.server.shutdown_timeout_seconds);

        let signalled = Arc::new(Notify::new());
        let shutdown = {
            let signalled = signalled.clone();
            async move {
                shutdown_signal().await;
                signalled.notify_one();
            }
        };

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown).into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => result?,
            _ = signalled.notified() => {
                // In-flight requests get `grace` to finish
                match tokio::time::timeout(grace, &mut server).await {
                    Ok(result) => result?,
                    Err(_) => tracing::warn!(
                        "Graceful shutdown timed out after {}s, dropping remaining connections",
                        grace.as_secs()
                    ),
                }
            }
        }

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Log configuration summary
    fn log_config_summary(&self) {
        tracing::info!("=== Faultline Server Configuration ===");
        tracing::info!("Bind Address: {}", self.config.server.bind_address);
        tracing::info!("API Version: {}", self.config.api.version);
        tracing::info!("Seed Data: {}", if self.config.api.seed_data { "Loaded" } else { "Empty store" });
        tracing::info!(
            "Fault Limits: delay {}s, iterations {}, memory {} MB",
            self.config.faults.max_delay_seconds,
            self.config.faults.max_iterations,
            self.config.faults.max_memory_mb
        );
        match self.config.faults.random_seed {
            Some(seed) => tracing::info!("Random Seed: {}", seed),
            None => tracing::info!("Random Seed: OS entropy"),
        }
        tracing::info!("CORS: {}", if self.config.server.enable_cors { "Enabled" } else { "Disabled" });
        tracing::info!("Request ID: {}", if self.config.server.enable_request_id { "Enabled" } else { "Disabled" });
        tracing::info!("Tracing: {}", if self.config.server.enable_tracing { "Enabled" } else { "Disabled" });
    }
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
