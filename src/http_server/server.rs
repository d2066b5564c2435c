//! # HTTP Server
//!
//! Main HTTP server combining the status and member routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::HttpServerConfig;
use crate::db::MemberStore;

use super::member_routes::{member_routes, MemberState};
use super::status_routes::status_routes;

/// HTTP server for the fitness center API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn MemberStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<dyn MemberStore>) -> Router {
        let state = MemberState::new(store);

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Use configured origins for production
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Welcome page and health check at root level
            .merge(status_routes())
            // Member CRUD endpoints
            .merge(member_routes(state))
            // Apply CORS and request tracing
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting fitcenter HTTP server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryMemberStore;

    fn test_store() -> Arc<dyn MemberStore> {
        Arc::new(InMemoryMemberStore::new())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(test_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, test_store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(test_store());
        let _router = server.router();
        // If we get here, router construction succeeded
    }
}
