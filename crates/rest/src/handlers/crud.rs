//! Handlers shared by books, permission groups and departments.
//!
//! Each handler is generic over a [`Resource`] marker that selects the collection,
//! so one set of functions serves every route group.

use axum::{extract::State, response::Response};
use orgdocs_persistence::core::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{DocumentIdPath, JsonDocument};
use crate::responses;
use crate::services::{BOOKS, DEPARTMENTS, PERMISSIONS, ResourceSpec};
use crate::state::AppState;

/// Selects the resource kind a generic handler operates on.
pub trait Resource: Send + Sync + 'static {
    /// Collection, label and schema of the resource kind.
    fn spec() -> &'static ResourceSpec;
}

/// Marker for `/books` and `/book/...`.
pub struct Books;

/// Marker for `/permission/...`.
pub struct PermissionGroups;

/// Marker for `/department/...`.
pub struct Departments;

impl Resource for Books {
    fn spec() -> &'static ResourceSpec {
        &BOOKS
    }
}

impl Resource for PermissionGroups {
    fn spec() -> &'static ResourceSpec {
        &PERMISSIONS
    }
}

impl Resource for Departments {
    fn spec() -> &'static ResourceSpec {
        &DEPARTMENTS
    }
}

/// Lists every document of the resource kind.
///
/// # Response
///
/// - `200 OK` - JSON array of documents
pub async fn list_handler<S, R>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
    R: Resource,
{
    debug!(collection = R::spec().collection, "Processing list request");
    let documents = state.crud(R::spec()).list().await?;
    Ok(responses::documents(documents))
}

/// Reads one document.
///
/// # Response
///
/// - `200 OK` - the document
/// - `400 Bad Request` - malformed identifier
/// - `404 Not Found` - no such document
pub async fn read_handler<S, R>(
    State(state): State<AppState<S>>,
    DocumentIdPath(id): DocumentIdPath,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
    R: Resource,
{
    debug!(collection = R::spec().collection, id = %id, "Processing read request");
    let document = state.crud(R::spec()).get(id).await?;
    Ok(responses::document(document))
}

/// Creates a document.
///
/// # Response
///
/// - `201 Created` - `{"message": "<Label> created successfully", "id": "<hex>"}`
/// - `400 Bad Request` - body is not a JSON object, or fails the schema
pub async fn create_handler<S, R>(
    State(state): State<AppState<S>>,
    JsonDocument(document): JsonDocument,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
    R: Resource,
{
    debug!(
        collection = R::spec().collection,
        fields = document.len(),
        "Processing create request"
    );
    let created = state.crud(R::spec()).create(document).await?;
    Ok(responses::created(created))
}

/// Merges the body's top-level fields into a document.
///
/// # Response
///
/// - `200 OK` - `{"message": "<Label> updated successfully", "modified": bool}`
/// - `400 Bad Request` - malformed identifier, empty body, or `_id` in the body
/// - `404 Not Found` - no such document
pub async fn update_handler<S, R>(
    State(state): State<AppState<S>>,
    DocumentIdPath(id): DocumentIdPath,
    JsonDocument(fields): JsonDocument,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
    R: Resource,
{
    debug!(collection = R::spec().collection, id = %id, "Processing update request");
    let updated = state.crud(R::spec()).update(id, fields).await?;
    Ok(responses::ok(updated))
}

/// Deletes a document.
///
/// # Response
///
/// - `200 OK` - `{"message": "<Label> deleted successfully"}`
/// - `400 Bad Request` - malformed identifier
/// - `404 Not Found` - no such document
pub async fn delete_handler<S, R>(
    State(state): State<AppState<S>>,
    DocumentIdPath(id): DocumentIdPath,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
    R: Resource,
{
    debug!(collection = R::spec().collection, id = %id, "Processing delete request");
    let deleted = state.crud(R::spec()).delete(id).await?;
    Ok(responses::ok(deleted))
}
