//! Document identifier extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use orgdocs_persistence::types::DocumentId;
use tracing::warn;

use crate::error::RestError;

/// Extracts and parses the `{id}` path segment.
///
/// A segment that is not a 24-character hexadecimal identifier is rejected with
/// 400 before any store access.
#[derive(Debug, Clone, Copy)]
pub struct DocumentIdPath(pub DocumentId);

impl<S> FromRequestParts<S> for DocumentIdPath
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;

        DocumentId::parse(&raw).map(DocumentIdPath).map_err(|e| {
            warn!(id = %raw, "Rejected malformed identifier");
            RestError::from(e)
        })
    }
}
