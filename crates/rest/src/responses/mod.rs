//! Response construction helpers.
//!
//! Successful responses are plain JSON: a document, a list of documents, or a
//! service outcome. Error responses are produced by [`RestError`](crate::RestError).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orgdocs_persistence::types::Document;
use serde::Serialize;
use serde_json::Value;

/// `200 OK` with a serialized body.
pub fn ok<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// `201 Created` with a serialized body.
pub fn created<T: Serialize>(body: T) -> Response {
    (StatusCode::CREATED, Json(body)).into_response()
}

/// `200 OK` with a single document.
pub fn document(document: Document) -> Response {
    ok(Value::Object(document))
}

/// `200 OK` with a JSON array of documents.
pub fn documents(documents: Vec<Document>) -> Response {
    ok(documents.into_iter().map(Value::Object).collect::<Vec<_>>())
}
