//! HTTP API test harness.

use std::sync::Arc;

use axum_test::TestServer;
use orgdocs_persistence::backends::memory::MemoryBackend;
use orgdocs_persistence::core::DocumentStore;
use serde_json::Value;

use orgdocs_rest::{ServerConfig, create_app_with_store};

/// A test server plus a handle to the store behind it.
///
/// # Example
///
/// ```rust,ignore
/// let app = TestApp::new();
/// let id = app.create("/book/create", json!({"title": "Dune"})).await;
/// app.server.get(&format!("/book/{id}")).await.assert_status_ok();
/// ```
pub struct TestApp<S>
where
    S: DocumentStore + 'static,
{
    /// The test server instance.
    pub server: TestServer,

    /// The store behind the server.
    pub store: Arc<S>,
}

impl TestApp<MemoryBackend> {
    /// A server over an empty in-memory store with the test configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// A server over an empty in-memory store.
    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_store(MemoryBackend::new(), config)
    }
}

impl<S> TestApp<S>
where
    S: DocumentStore + 'static,
{
    /// A server over the given store.
    pub fn with_store(store: S, config: ServerConfig) -> Self {
        let store = Arc::new(store);
        let app = create_app_with_store(Arc::clone(&store), config);
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, store }
    }

    /// POSTs a body, asserts 201, and returns the new identifier.
    pub async fn create(&self, path: &str, body: Value) -> String {
        let response = self.server.post(path).json(&body).await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = response.json();
        body["id"]
            .as_str()
            .expect("create response should carry an id")
            .to_string()
    }

    /// GETs a path and returns the decoded body, asserting 200.
    pub async fn get_json(&self, path: &str) -> Value {
        let response = self.server.get(path).await;
        response.assert_status_ok();
        response.json()
    }
}
