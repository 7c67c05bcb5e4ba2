//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::build_app;
use crate::core::repository::EmployeeRepository;
use crate::core::service::{EmployeeManager, EmployeeService};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the employee HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_repository(InMemoryEmployeeRepository::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    service: Option<Arc<dyn EmployeeService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            service: None,
            custom_routes: Vec::new(),
        }
    }

    /// Serve employees from `repository` through the default service
    pub fn with_repository(self, repository: impl EmployeeRepository + 'static) -> Self {
        self.with_service(EmployeeManager::new(repository))
    }

    /// Use a custom service implementation
    pub fn with_service(mut self, service: impl EmployeeService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Use an already shared service
    pub fn with_shared_service(mut self, service: Arc<dyn EmployeeService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let service = self.service.ok_or_else(|| {
            anyhow::anyhow!(
                "EmployeeService is required. Call .with_repository() or .with_service()"
            )
        })?;

        Ok(build_app(AppState::new(service), self.custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds `addr`, serves until SIGTERM or Ctrl+C, then drains in-flight
    /// requests.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", listener.local_addr()?);

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

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
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
