//! MongoDB backend implementation.
//!
//! Each logical collection maps to one MongoDB collection in the configured database.
//! Identifiers are stored as native ObjectIds in `_id` and rendered as hexadecimal
//! strings when documents leave the store.
//!
//! # Example
//!
//! ```no_run
//! use orgdocs_persistence::backends::mongodb::{MongoBackend, MongoBackendConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MongoBackendConfig::new("mongodb://localhost:27017", "orgdocs");
//! let backend = MongoBackend::connect(config).await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod storage;

pub use backend::{MongoBackend, MongoBackendConfig};
