//! Service Configuration
//!
//! Configuration for the MySQL connection and the HTTP server. Both carry
//! fixed defaults and accept environment-variable overrides.

use std::env;

use serde::{Deserialize, Serialize};

/// MySQL connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    /// Database host (default: "localhost")
    #[serde(default = "default_db_host")]
    pub host: String,

    /// Database name (default: "fitness_center")
    #[serde(default = "default_db_name")]
    pub name: String,

    /// Database user (default: "fitness")
    #[serde(default = "default_db_user")]
    pub user: String,

    /// Database password (default: empty)
    #[serde(default = "default_db_password")]
    pub password: String,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_name() -> String {
    "fitness_center".to_string()
}

fn default_db_user() -> String {
    "fitness".to_string()
}

fn default_db_password() -> String {
    String::new()
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            name: default_db_name(),
            user: default_db_user(),
            password: default_db_password(),
        }
    }
}

impl DbConfig {
    /// Build a config from `DB_HOST`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`,
    /// falling back to the defaults for any variable that is unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("DB_HOST").unwrap_or(defaults.host),
            name: env::var("DB_NAME").unwrap_or(defaults.name),
            user: env::var("DB_USER").unwrap_or(defaults.user),
            password: env::var("DB_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_http_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_http_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_http_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Build a config from `HTTP_HOST` / `HTTP_PORT`, falling back to the
    /// defaults for any variable that is unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HTTP_HOST").unwrap_or(defaults.host),
            port: env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: defaults.cors_origins,
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_config() {
        let config = DbConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.name, "fitness_center");
        assert_eq!(config.user, "fitness");
        assert!(config.password.is_empty());
    }

    #[test]
    fn test_default_http_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }
}
