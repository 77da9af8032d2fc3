//! Application state for the orgdocs HTTP API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the document store and the server configuration.

use std::sync::Arc;

use orgdocs_persistence::core::DocumentStore;

use crate::config::ServerConfig;
use crate::services::{CrudService, ResourceSpec, UserService};

/// Shared application state for the HTTP API.
///
/// # Type Parameters
///
/// * `S` - The store backend type (must implement [`DocumentStore`])
///
/// # Example
///
/// ```rust
/// use orgdocs_rest::{AppState, ServerConfig};
/// use orgdocs_persistence::backends::memory::MemoryBackend;
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::for_testing());
/// assert_eq!(state.store().backend_name(), "memory");
/// # use orgdocs_persistence::core::DocumentStore;
/// ```
pub struct AppState<S> {
    /// The document store.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a clone of the store Arc.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Builds the generic CRUD service for one resource kind.
    pub fn crud(&self, spec: &'static ResourceSpec) -> CrudService<S> {
        CrudService::new(self.store_arc(), spec)
    }

    /// Builds the user service.
    pub fn users(&self) -> UserService<S> {
        UserService::new(self.store_arc())
    }
}
