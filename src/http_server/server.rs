//! # HTTP Server
//!
//! Wraps the REST routes with CORS and request tracing, then serves them.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;

/// HTTP server for the programmers API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around the given API routes
    pub fn with_config(config: HttpServerConfig, api: Router) -> Self {
        let router = api
            .layer(TraceLayer::new_for_http())
            .layer(config.cors.layer());
        Self { config, router }
    }

    /// `host:port` the server will bind
    pub fn bind_target(&self) -> String {
        self.config.bind_target()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl+C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.bind_target()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl+C
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "She's alive on port {}", addr.port());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
