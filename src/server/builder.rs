//! ServerBuilder for fluent API to build the HTTP application

use super::handlers::StoreAppState;
use super::router::{build_store_routes, health_routes};
use crate::core::repository::StoreRepository;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the store service router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_repository(InMemoryStoreRepository::new())
///     .with_cors(true)
///     .build()?;
/// ```
pub struct ServerBuilder {
    repository: Option<Arc<dyn StoreRepository>>,
    cors: bool,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            repository: None,
            cors: false,
            custom_routes: Vec::new(),
        }
    }

    /// Set the store repository (required)
    pub fn with_repository(mut self, repository: impl StoreRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Set an already shared store repository (required)
    pub fn with_shared_repository(mut self, repository: Arc<dyn StoreRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Install a permissive CORS layer
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }

    /// Add custom routes to the server
    ///
    /// Custom routes are merged after the store routes and must not reuse
    /// their paths.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let admin = Router::new().route("/admin/version", get(version));
    ///
    /// ServerBuilder::new()
    ///     .with_repository(repository)
    ///     .with_custom_routes(admin)
    ///     .build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// This merges health routes, store routes and custom routes, then adds
    /// an HTTP trace layer and, when enabled, CORS.
    pub fn build(self) -> Result<Router> {
        let repository = self
            .repository
            .ok_or_else(|| anyhow::anyhow!("StoreRepository is required. Call .with_repository()"))?;

        let mut app = health_routes().merge(build_store_routes(StoreAppState::new(repository)));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        app = app.layer(TraceLayer::new_for_http());

        if self.cors {
            app = app.layer(CorsLayer::permissive());
        }

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// A signal that cannot be installed is logged and never fires, so the
/// server keeps running until the other one arrives.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
