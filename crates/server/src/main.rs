//! orgdocs server
//!
//! Serves the book catalogue and the organisation directory over the configured
//! document store.

use std::sync::Arc;

use clap::Parser;
use orgdocs_persistence::backends::memory::MemoryBackend;
use orgdocs_persistence::core::{BackendKind, DocumentStore};
use orgdocs_rest::{ServerConfig, create_app_with_store, init_logging};
use tracing::{info, warn};

#[cfg(feature = "sqlite")]
use orgdocs_persistence::backends::sqlite::SqliteBackend;

/// Creates and initializes a SQLite backend from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_deref().unwrap_or("orgdocs.db");
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = if db_path == ":memory:" {
        SqliteBackend::in_memory()?
    } else {
        SqliteBackend::open(db_path)?
    };
    backend.init_schema()?;

    Ok(backend)
}

/// Starts the Axum HTTP server and closes the store once it has shut down.
async fn serve<S>(store: Arc<S>, config: &ServerConfig) -> anyhow::Result<()>
where
    S: DocumentStore + 'static,
{
    let app = create_app_with_store(Arc::clone(&store), config.clone());

    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(backend = store.backend_name(), "Server stopped, closing store");
    store.close().await?;
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        books = config.enable_books,
        directory = config.enable_directory,
        "Starting orgdocs server"
    );

    match backend_mode {
        BackendKind::Memory => start_memory(config).await?,
        BackendKind::Sqlite => start_sqlite(config).await?,
        BackendKind::MongoDB => start_mongodb(config).await?,
    }

    Ok(())
}

/// Starts the server with the in-memory backend. Data is lost on exit.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    warn!("Using the in-memory backend; documents will not survive a restart");
    serve(Arc::new(MemoryBackend::new()), &config).await
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    serve(Arc::new(backend), &config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p orgdocs-server --features sqlite"
    )
}

/// Starts the server with the MongoDB backend.
#[cfg(feature = "mongodb")]
async fn start_mongodb(config: ServerConfig) -> anyhow::Result<()> {
    use orgdocs_persistence::backends::mongodb::{MongoBackend, MongoBackendConfig};

    let uri = config
        .database_url
        .as_deref()
        .unwrap_or("mongodb://localhost:27017");
    info!(database = %config.database_name, "Initializing MongoDB backend");

    let backend = MongoBackend::connect(MongoBackendConfig::new(uri, &config.database_name)).await?;
    backend.ping().await?;

    serve(Arc::new(backend), &config).await
}

/// Fallback when mongodb feature is not enabled.
#[cfg(not(feature = "mongodb"))]
async fn start_mongodb(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The mongodb backend requires the 'mongodb' feature. \
         Build with: cargo build -p orgdocs-server --features mongodb"
    )
}
