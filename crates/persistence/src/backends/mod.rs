//! Document store backends.
//!
//! Each backend implements [`DocumentStore`](crate::core::DocumentStore). The SQLite and
//! MongoDB backends are gated behind feature flags.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | always | Process-local maps, for tests and throwaway deployments |
//! | SQLite | `sqlite` | Embedded database, in-memory or file-based |
//! | MongoDB | `mongodb` | Native document store |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! use orgdocs_persistence::backends::sqlite::SqliteBackend;
//!
//! # #[cfg(feature = "sqlite")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let backend = SqliteBackend::open("./data/orgdocs.db")?;
//! # Ok(())
//! # }
//! ```

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "mongodb")]
pub mod mongodb;
