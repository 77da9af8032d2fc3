//! Core storage traits and abstractions.
//!
//! - [`DocumentStore`] - find/insert/update/delete over named collections
//! - [`BackendKind`] - which backend a store runs on
//!
//! # Example: Implementing a Store
//!
//! ```ignore
//! use async_trait::async_trait;
//! use orgdocs_persistence::core::DocumentStore;
//! use orgdocs_persistence::error::StorageResult;
//!
//! struct MyStore {
//!     // ... backend-specific fields
//! }
//!
//! #[async_trait]
//! impl DocumentStore for MyStore {
//!     fn backend_name(&self) -> &'static str {
//!         "my-store"
//!     }
//!
//!     async fn count(&self, collection: &str) -> StorageResult<u64> {
//!         // ...
//!     }
//!
//!     // ... remaining operations
//! }
//! ```

mod backend;
mod store;

pub use backend::BackendKind;
pub use store::DocumentStore;
