//! Axum extractors for request bodies and path identifiers.
//!
//! - [`JsonDocument`] - a JSON object body
//! - [`DocumentIdPath`] - a parsed `{id}` path segment

pub mod document_id;
pub mod json_document;

pub use document_id::DocumentIdPath;
pub use json_document::{JsonDocument, JsonDocumentRejection};
