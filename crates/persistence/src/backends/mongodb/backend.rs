//! MongoDB client setup.

use std::fmt::Debug;
use std::time::Duration;

use bson::Document as BsonDocument;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BackendError, StorageError, StorageResult};

/// Configuration for the MongoDB backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoBackendConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`.
    pub uri: String,

    /// Database holding the collections.
    pub database: String,

    /// Application name reported to the server.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Server selection timeout in milliseconds.
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,
}

fn default_app_name() -> String {
    "orgdocs".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    10000
}

fn default_server_selection_timeout_ms() -> u64 {
    10000
}

impl MongoBackendConfig {
    /// Creates a configuration with default timeouts.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            app_name: default_app_name(),
            connect_timeout_ms: default_connect_timeout_ms(),
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
        }
    }
}

/// MongoDB document store.
pub struct MongoBackend {
    client: Client,
    database: Database,
    config: MongoBackendConfig,
}

impl Debug for MongoBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoBackend")
            .field("database", &self.config.database)
            .finish_non_exhaustive()
    }
}

impl MongoBackend {
    /// Builds a client for the configured deployment.
    ///
    /// The driver connects lazily; use `ping` to confirm the server is reachable.
    pub async fn connect(config: MongoBackendConfig) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "mongodb".to_string(),
                message: e.to_string(),
            })
        })?;
        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(Duration::from_millis(config.connect_timeout_ms));
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms));

        let client = Client::with_options(options).map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "mongodb".to_string(),
                message: e.to_string(),
            })
        })?;
        let database = client.database(&config.database);

        info!(database = %config.database, "MongoDB client initialized");

        Ok(Self {
            client,
            database,
            config,
        })
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &MongoBackendConfig {
        &self.config
    }

    pub(crate) fn collection(&self, name: &str) -> Collection<BsonDocument> {
        self.database.collection(name)
    }

    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}
