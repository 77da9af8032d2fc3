//! SQLite backend implementation.
//!
//! Supports in-memory databases (for tests) and file-based databases (for
//! development and small deployments). All collections share one table; each row holds
//! a document serialized as JSON.
//!
//! # Example
//!
//! ```no_run
//! use orgdocs_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("./data/orgdocs.db")?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE documents (
//!     collection TEXT NOT NULL,
//!     id TEXT NOT NULL,          -- 24-char hex ObjectId
//!     data BLOB NOT NULL,        -- JSON document, including _id
//!     created_at TEXT NOT NULL,
//!     last_updated TEXT NOT NULL,
//!     PRIMARY KEY (collection, id)
//! );
//!
//! CREATE TABLE schema_version (
//!     version INTEGER NOT NULL
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
