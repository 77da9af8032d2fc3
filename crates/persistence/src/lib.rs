//! Orgdocs Persistence Layer
//!
//! This crate stores the JSON documents behind the orgdocs book and directory
//! services. It provides a single [`DocumentStore`] trait with interchangeable
//! backends, a schema validator for the directory resources, and typed write outcomes
//! that keep "nothing matched" apart from genuine store faults.
//!
//! # Backend Features
//!
//! ```toml
//! [dependencies]
//! orgdocs-persistence = { version = "0.1", features = ["mongodb"] }
//! ```
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `mongodb` - MongoDB via the official driver
//!
//! The in-memory backend is always available.
//!
//! # Architecture
//!
//! - [`types`] - identifiers, documents, filters, projections, patches, outcomes
//! - [`error`] - error types for all operations
//! - [`core`] - the [`DocumentStore`] trait and [`BackendKind`]
//! - [`schema`] - schema descriptors and the validator
//! - [`backends`] - backend implementations
//!
//! # Quick Start
//!
//! ```
//! use orgdocs_persistence::backends::memory::MemoryBackend;
//! use orgdocs_persistence::core::DocumentStore;
//! use orgdocs_persistence::types::{Document, Filter, Patch};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let store = MemoryBackend::new();
//!
//! let mut book = Document::new();
//! book.insert("title".to_string(), json!("Dune"));
//! let id = store.insert("books", book).await.unwrap();
//!
//! let patch = Patch::set("year", json!(1965)).unwrap();
//! let outcome = store.update("books", &Filter::by_id(id), &patch).await.unwrap();
//! assert!(outcome.is_modified());
//!
//! let deleted = store.delete("books", &Filter::by_id(id)).await.unwrap();
//! assert!(deleted.is_deleted());
//! # });
//! ```
//!
//! # Validation
//!
//! ```
//! use orgdocs_persistence::schema::{validate, PERMISSION_GROUP_SCHEMA};
//! use serde_json::json;
//!
//! let group = json!({"name": "admins", "permissions": ["read", "write"]});
//! assert!(validate(&group, &PERMISSION_GROUP_SCHEMA).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod schema;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{DeleteOutcome, Document, DocumentId, Filter, Patch, Projection, UpdateOutcome};

// Re-export core traits
pub use core::{BackendKind, DocumentStore};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
