//! User profile handlers.

use axum::{extract::State, response::Response};
use orgdocs_persistence::core::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{DocumentIdPath, JsonDocument};
use crate::responses;
use crate::state::AppState;

/// Lists users.
///
/// Each entry carries `_id`, `name`, `employee_id`, `position` and `department.name`.
pub async fn list_users_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!("Processing user list request");
    let users = state.users().list().await?;
    Ok(responses::documents(users))
}

/// Reads one user's profile fields.
pub async fn read_user_handler<S>(
    State(state): State<AppState<S>>,
    DocumentIdPath(id): DocumentIdPath,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(id = %id, "Processing user read request");
    let user = state.users().get(id).await?;
    Ok(responses::document(user))
}

/// Creates a user after schema validation.
pub async fn create_user_handler<S>(
    State(state): State<AppState<S>>,
    JsonDocument(document): JsonDocument,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(fields = document.len(), "Processing user create request");
    let created = state.users().create(document).await?;
    Ok(responses::created(created))
}

/// Applies a partial profile update.
///
/// # Response
///
/// - `200 OK` - `{"user": {...}, "department": {...} | null, "permission": {...} | null}`
/// - `400 Bad Request` - malformed identifier or malformed `department`
/// - `404 Not Found` - no such user
pub async fn update_user_handler<S>(
    State(state): State<AppState<S>>,
    DocumentIdPath(id): DocumentIdPath,
    JsonDocument(fields): JsonDocument,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(
        id = %id,
        department = fields.contains_key("department"),
        permissions = fields.contains_key("permissions"),
        "Processing user update request"
    );
    let report = state.users().update_profile(id, fields).await?;
    Ok(responses::ok(report))
}

/// Deletes a user.
pub async fn delete_user_handler<S>(
    State(state): State<AppState<S>>,
    DocumentIdPath(id): DocumentIdPath,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(id = %id, "Processing user delete request");
    let deleted = state.users().delete(id).await?;
    Ok(responses::ok(deleted))
}
