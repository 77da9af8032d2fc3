//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orgdocs_persistence::core::DocumentStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - `{"status": "healthy", "backend": "...", "timestamp": "..."}`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.store().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe. Pings the store.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - the store answered
/// - `503 Service Unavailable` - the store did not answer
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!("Processing readiness check request");

    let backend_name = state.store().backend_name();
    state
        .store()
        .ping()
        .await
        .map_err(|e| RestError::ServiceUnavailable {
            message: e.to_string(),
        })?;

    let response = serde_json::json!({
        "status": "ready",
        "backend": backend_name,
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
