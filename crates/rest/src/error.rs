//! Error types for the REST API.
//!
//! Every error is rendered as a JSON body of the form `{"message": "<text>"}`.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are mapped to HTTP status codes:
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | NotFound | 404 |
//! | InvalidIdentifier | 400 |
//! | ValidationError | 400 |
//! | BackendError | 500 (message redacted) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use orgdocs_persistence::error::{ResourceError, StorageError};
use serde_json::json;
use std::fmt;
use tracing::{error, warn};

/// Body text returned for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body text returned for every 503 response.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service unavailable";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Document not found (HTTP 404).
    NotFound {
        /// Display label of the resource kind (e.g., "Book").
        resource: String,
    },

    /// Malformed document identifier (HTTP 400).
    InvalidIdentifier {
        /// The rejected path segment.
        value: String,
    },

    /// Document failed schema or patch validation (HTTP 400).
    Validation {
        /// Description of the first violation.
        message: String,
    },

    /// Bad request - undecodable body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Request body exceeds the configured limit (HTTP 413).
    PayloadTooLarge,

    /// The store cannot serve requests (HTTP 503).
    ///
    /// The message is logged but never sent to the client.
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    ///
    /// The message is logged but never sent to the client.
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource } => write!(f, "{} not found", resource),
            RestError::InvalidIdentifier { value } => {
                write!(f, "Invalid identifier: '{}'", value)
            }
            RestError::Validation { message } => {
                write!(f, "Invalid request data: {}", message)
            }
            RestError::BadRequest { message } => write!(f, "{}", message),
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::PayloadTooLarge => write!(f, "Request body is too large"),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::InvalidIdentifier { .. }
            | RestError::Validation { .. }
            | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed with internal error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            RestError::ServiceUnavailable { message } => {
                warn!(error = %message, "Store unavailable");
                SERVICE_UNAVAILABLE_MESSAGE.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(message_body(&message))).into_response()
    }
}

/// Builds the `{"message": ...}` body shared by all responses.
pub fn message_body(message: &str) -> serde_json::Value {
    json!({ "message": message })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => RestError::Validation {
                message: e.to_string(),
            },
            StorageError::Backend(e) => RestError::InternalError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { resource, .. } => RestError::NotFound { resource },
            ResourceError::InvalidIdentifier { value } => RestError::InvalidIdentifier { value },
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
