//! # Connection Provider
//!
//! Opens one MySQL connection per store operation from fixed configuration.
//! No pooling, no retry, no backoff: every operation pays full connection
//! setup cost, and the caller owns the connection and closes it on every
//! exit path.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::ConnectOptions;
use thiserror::Error;

use crate::config::DbConfig;

/// Failure to establish a database connection
#[derive(Debug, Error)]
#[error("database connection failed: {0}")]
pub struct ProviderError(#[from] sqlx::Error);

/// Opens MySQL connections from a fixed `DbConfig`
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    options: MySqlConnectOptions,
}

impl ConnectionProvider {
    pub fn new(config: DbConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .database(&config.name)
            .username(&config.user)
            .password(&config.password);
        Self { options }
    }

    /// Open a fresh connection.
    ///
    /// Connection failures are logged here with their cause; the caller only
    /// sees the typed error and must not run any statement without a
    /// connection in hand.
    pub async fn acquire(&self) -> Result<MySqlConnection, ProviderError> {
        match self.options.connect().await {
            Ok(conn) => Ok(conn),
            Err(e) => {
                tracing::error!(error = %e, "could not connect to MySQL");
                Err(ProviderError(e))
            }
        }
    }
}
