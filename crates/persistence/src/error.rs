//! Error types for the persistence layer.
//!
//! Errors are split into three categories: resource state errors (not found,
//! malformed identifiers), validation errors raised by the schema validator or by
//! patch construction, and backend errors describing a fault in the underlying store.
//! A store operation that simply affects zero documents is never an error.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns `true` if this error describes a fault in the store itself.
    pub fn is_backend_fault(&self) -> bool {
        matches!(self, StorageError::Backend(_))
    }
}

/// Errors related to resource state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The requested document was not found.
    ///
    /// `resource` carries the display label of the resource kind (for example `Book`).
    #[error("{resource} not found")]
    NotFound { resource: String, id: String },

    /// The identifier is not a 24-character hexadecimal ObjectId.
    #[error("invalid identifier: '{value}'")]
    InvalidIdentifier { value: String },
}

/// Errors related to document validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The document is not a JSON object.
    #[error("document must be a JSON object, found {found}")]
    NotAnObject { found: String },

    /// A required field is absent.
    #[error("'{path}' is a required property")]
    MissingRequiredField { path: String },

    /// A field holds a value of the wrong JSON type.
    #[error("'{path}' must be of type {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: String,
        found: String,
    },

    /// A string field does not match its declared format.
    #[error("'{path}' is not a valid {format}")]
    InvalidFormat { path: String, format: String },

    /// The field cannot be changed after creation.
    #[error("'{field}' is immutable")]
    ImmutableField { field: String },

    /// A patch with no fields.
    #[error("update must contain at least one field")]
    EmptyPatch,

    /// A patch key that starts with `$` or contains `.`.
    #[error("'{field}' is not a valid field name")]
    InvalidFieldName { field: String },

    /// An integer the backend cannot store.
    #[error("number {value} is out of range")]
    NumberOutOfRange { value: String },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

impl From<bson::ser::Error> for StorageError {
    fn from(err: bson::ser::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

impl From<bson::de::Error> for StorageError {
    fn from(err: bson::de::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "mongodb".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}
