//! # orgdocs-rest - HTTP API for books and the organisation directory
//!
//! This crate exposes CRUD endpoints over the [`DocumentStore`] from
//! `orgdocs-persistence` for four resource kinds: books, users, permission groups
//! and departments. Users, permission groups and departments are validated against
//! fixed schemas on create; books accept any JSON object.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orgdocs_rest::{create_app_with_config, ServerConfig};
//! use orgdocs_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("orgdocs.db")?;
//!     backend.init_schema()?;
//!
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(backend, config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Resource | List | Read | Create | Update | Delete |
//! |----------|------|------|--------|--------|--------|
//! | Book | `GET /books` | `GET /book/{id}` | `POST /book/create` | `PUT /book/update/{id}` | `DELETE /book/delete/{id}` |
//! | User | `GET /user` | `GET /user/{id}` | `POST /user` | `PUT /user/update/{id}` | `DELETE /user/delete/{id}` |
//! | Permission group | `GET /permission` | `GET /permission/{id}` | `POST /permission` | `PUT /permission/update/{id}` | `DELETE /permission/delete/{id}` |
//! | Department | `GET /department` | `GET /department/{id}` | `POST /department` | `PUT /department/update/{id}` | `DELETE /department/delete/{id}` |
//!
//! Plus `GET /health`, `GET /_liveness` and `GET /_readiness`.
//!
//! ## Error Handling
//!
//! Every error body is `{"message": "<text>"}`:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | malformed identifier, body that is not a JSON object, schema violation |
//! | 404 | no document with that identifier |
//! | 408 | request exceeded the configured timeout |
//! | 413 | body larger than `max_body_size` |
//! | 415 | non-JSON content type |
//! | 500 | store fault or panic (details are logged, not returned) |
//! | 503 | readiness probe could not reach the store |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`services`] - Validation and store orchestration per resource kind
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for bodies and identifiers
//! - [`responses`] - Response construction
//! - [`routing`] - Route configuration
//!
//! [`DocumentStore`]: orgdocs_persistence::core::DocumentStore

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orgdocs_persistence::core::DocumentStore;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust
/// use orgdocs_rest::{create_app_with_config, ServerConfig};
/// use orgdocs_persistence::backends::memory::MemoryBackend;
///
/// let config = ServerConfig {
///     enable_books: false,
///     ..ServerConfig::for_testing()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_store(Arc::new(store), config)
}

/// Creates the Axum application over a store the caller keeps a handle to.
///
/// The server binary uses this to close the store after shutdown.
pub fn create_app_with_store<S>(store: Arc<S>, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    info!(
        "Creating HTTP API server with backend: {}",
        store.backend_name()
    );

    // Create application state
    let state = AppState::new(store, config.clone());

    // Build the router with all enabled routes
    let router = routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ))
        .layer(CatchPanicLayer::custom(handle_panic));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Turns a panic in request processing into a redacted 500 response.
fn handle_panic(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(panic = %detail, "Request handler panicked");

    RestError::InternalError { message: detail }.into_response()
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides the
/// given level.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "orgdocs_rest={level},orgdocs_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
