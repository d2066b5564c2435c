//! fitcenter entry point
//!
//! This is a minimal entrypoint that:
//! 1. Initializes the tracing subscriber
//! 2. Loads configuration from the environment
//! 3. Wires the MySQL-backed store into the HTTP server
//! 4. Serves until shutdown, exiting non-zero on failure
//!
//! All request logic lives in the library modules.

use std::sync::Arc;

use fitcenter::config::{DbConfig, HttpServerConfig};
use fitcenter::db::{ConnectionProvider, MySqlMemberStore};
use fitcenter::http_server::HttpServer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitcenter=info,tower_http=info".into()),
        )
        .init();

    let provider = ConnectionProvider::new(DbConfig::from_env());
    let store = Arc::new(MySqlMemberStore::new(provider));

    let server = HttpServer::with_config(HttpServerConfig::from_env(), store);
    if let Err(e) = server.start().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
