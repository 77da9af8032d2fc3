//! Core types for the persistence layer.
//!
//! - [`DocumentId`] - ObjectId-backed identifier stored in `_id`
//! - [`Document`] - a schemaless JSON object
//! - [`Filter`], [`Projection`], [`Patch`] - query shapes
//! - [`UpdateOutcome`], [`DeleteOutcome`] - write results
//!
//! # Examples
//!
//! ```
//! use orgdocs_persistence::types::{DocumentId, Filter, Patch};
//! use serde_json::json;
//!
//! let id = DocumentId::new();
//! let filter = Filter::by_id(id);
//! assert!(filter.matches(&id));
//!
//! let patch = Patch::set("title", json!("Dune")).unwrap();
//! assert_eq!(patch.get("title"), Some(&json!("Dune")));
//! ```

mod document;
mod document_id;
mod outcome;

pub use document::{Document, Filter, Patch, Projection, document_id};
pub use document_id::{DocumentId, ID_FIELD};
pub use outcome::{DeleteOutcome, UpdateOutcome};
