//! JSON document extractor.
//!
//! Extracts a JSON object from the request body.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use orgdocs_persistence::schema::json_type_name;
use orgdocs_persistence::types::Document;
use serde_json::Value;
use tracing::warn;

use crate::error::RestError;

/// Axum extractor for JSON object bodies.
///
/// A missing `Content-Type` is read as JSON. Any other non-JSON media type is
/// rejected with 415.
///
/// # Example
///
/// ```rust,ignore
/// use orgdocs_rest::extractors::JsonDocument;
///
/// async fn create_handler(JsonDocument(document): JsonDocument) {
///     println!("{} fields", document.len());
/// }
/// ```
#[derive(Debug)]
pub struct JsonDocument(pub Document);

impl JsonDocument {
    /// Consumes the extractor and returns the document.
    pub fn into_inner(self) -> Document {
        self.0
    }
}

/// Error type for JSON document extraction failures.
#[derive(Debug)]
pub enum JsonDocumentRejection {
    /// The body could not be read or parsed.
    InvalidJson(String),
    /// The body parsed but is not an object.
    NotAnObject(&'static str),
    /// Unsupported content type.
    UnsupportedMediaType(String),
    /// The body exceeds the configured limit.
    PayloadTooLarge,
}

impl IntoResponse for JsonDocumentRejection {
    fn into_response(self) -> Response {
        let error = match self {
            JsonDocumentRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid request data: {}", msg),
            },
            JsonDocumentRejection::NotAnObject(found) => RestError::BadRequest {
                message: format!(
                    "Invalid request data: request body must be a JSON object, found {}",
                    found
                ),
            },
            JsonDocumentRejection::UnsupportedMediaType(ct) => {
                RestError::UnsupportedMediaType { content_type: ct }
            }
            JsonDocumentRejection::PayloadTooLarge => RestError::PayloadTooLarge,
        };
        warn!(error = %error, "Rejected request body");
        error.into_response()
    }
}

impl<S> FromRequest<S> for JsonDocument
where
    S: Send + Sync,
{
    type Rejection = JsonDocumentRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Check content type (must own the string before moving req)
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !is_json_content_type(&content_type) {
            return Err(JsonDocumentRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                JsonDocumentRejection::PayloadTooLarge
            } else {
                JsonDocumentRejection::InvalidJson(e.body_text())
            }
        })?;

        parse_document(&bytes).map(JsonDocument)
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .parse::<mime::Mime>()
        .map(|m| m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
        .unwrap_or(false)
}

fn parse_document(bytes: &[u8]) -> Result<Document, JsonDocumentRejection> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| JsonDocumentRejection::InvalidJson(e.to_string()))?;

    match value {
        Value::Object(document) => Ok(document),
        other => Err(JsonDocumentRejection::NotAnObject(json_type_name(&other))),
    }
}
