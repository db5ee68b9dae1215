//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Catalog JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Product database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // .env is optional
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::observability::LogFormat;

    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--database-url",
            "postgres://localhost/catalog",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.database.database_max_connections, 10);
        assert!(config.database.database_run_migrations, "migrations on by default");
        assert!(matches!(config.logging.log_format, LogFormat::Compact), "compact logs by default");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--database-url",
            "postgres://localhost/catalog",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--database-max-connections",
            "2",
            "--database-run-migrations",
            "false",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert!(matches!(config.logging.log_format, LogFormat::Json), "json logs requested");
        assert_eq!(config.database.database_max_connections, 2);
        assert!(!config.database.database_run_migrations, "migrations disabled");

        Ok(())
    }
}
