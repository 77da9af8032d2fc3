//! Server configuration for the orgdocs HTTP API.
//!
//! This module provides configuration types for the server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ORGDOCS_SERVER_PORT` | 8000 | Server port |
//! | `ORGDOCS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `ORGDOCS_LOG_LEVEL` | info | Log level |
//! | `ORGDOCS_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `ORGDOCS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ORGDOCS_ENABLE_CORS` | true | Enable CORS |
//! | `ORGDOCS_CORS_ORIGINS` | * | Allowed origins |
//! | `ORGDOCS_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `ORGDOCS_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `ORGDOCS_STORAGE_BACKEND` | sqlite | `memory`, `sqlite` or `mongodb` |
//! | `ORGDOCS_DATABASE_URL` | (none) | SQLite path or `mongodb://` URI |
//! | `ORGDOCS_DATABASE_NAME` | orgdocs | MongoDB database name |
//! | `ORGDOCS_ENABLE_BOOKS` | true | Mount the book routes |
//! | `ORGDOCS_ENABLE_DIRECTORY` | true | Mount the user, permission and department routes |
//!
//! # Example
//!
//! ```rust
//! use orgdocs_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_books: false,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;
use orgdocs_persistence::core::BackendKind;

/// Server configuration for the orgdocs HTTP API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "orgdocs")]
#[command(about = "Book catalogue and organisation directory server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ORGDOCS_SERVER_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ORGDOCS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ORGDOCS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "ORGDOCS_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "ORGDOCS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ORGDOCS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ORGDOCS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "ORGDOCS_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "ORGDOCS_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Storage backend (memory, sqlite, mongodb).
    #[arg(long, env = "ORGDOCS_STORAGE_BACKEND", default_value = "sqlite")]
    pub storage_backend: String,

    /// Database connection string (SQLite path or MongoDB URI).
    #[arg(long, env = "ORGDOCS_DATABASE_URL")]
    pub database_url: Option<String>,

    /// MongoDB database name.
    #[arg(long, env = "ORGDOCS_DATABASE_NAME", default_value = "orgdocs")]
    pub database_name: String,

    /// Mount the book routes.
    #[arg(long, env = "ORGDOCS_ENABLE_BOOKS", default_value = "true")]
    pub enable_books: bool,

    /// Mount the user, permission group and department routes.
    #[arg(long, env = "ORGDOCS_ENABLE_DIRECTORY", default_value = "true")]
    pub enable_directory: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            storage_backend: "sqlite".to_string(),
            database_url: None,
            database_name: "orgdocs".to_string(),
            enable_books: true,
            enable_directory: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured storage backend name.
    pub fn storage_backend_mode(&self) -> Result<BackendKind, String> {
        self.storage_backend.parse()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if let Err(e) = self.storage_backend_mode() {
            errors.push(e);
        }

        if self.database_name.trim().is_empty() {
            errors.push("Database name cannot be empty".to_string());
        }

        if !self.enable_books && !self.enable_directory {
            errors.push("At least one of books or directory routes must be enabled".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, the in-memory backend, and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 64 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            storage_backend: "memory".to_string(),
            database_url: None,
            database_name: "orgdocs_test".to_string(),
            enable_books: true,
            enable_directory: true,
        }
    }
}
