//! Stores that fail, panic or stall on purpose.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use orgdocs_persistence::backends::memory::MemoryBackend;
use orgdocs_persistence::core::DocumentStore;
use orgdocs_persistence::error::{BackendError, StorageResult};
use orgdocs_persistence::types::{
    DeleteOutcome, Document, DocumentId, Filter, Patch, Projection, UpdateOutcome,
};

/// Text carried by every fault of [`FailingStore`]; must never reach a response body.
pub const FAULT_TEXT: &str = "disk I/O error at sector 7";

fn fault<T>() -> StorageResult<T> {
    Err(BackendError::QueryError {
        message: FAULT_TEXT.to_string(),
    }
    .into())
}

/// Every operation fails with a backend fault.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &Filter,
        _projection: Option<&Projection>,
    ) -> StorageResult<Vec<Document>> {
        fault()
    }

    async fn insert(&self, _collection: &str, _document: Document) -> StorageResult<DocumentId> {
        fault()
    }

    async fn update(
        &self,
        _collection: &str,
        _filter: &Filter,
        _patch: &Patch,
    ) -> StorageResult<UpdateOutcome> {
        fault()
    }

    async fn delete(&self, _collection: &str, _filter: &Filter) -> StorageResult<DeleteOutcome> {
        fault()
    }

    async fn count(&self, _collection: &str) -> StorageResult<u64> {
        fault()
    }

    async fn ping(&self) -> StorageResult<()> {
        Err(BackendError::Unavailable {
            backend_name: "failing".to_string(),
            message: FAULT_TEXT.to_string(),
        }
        .into())
    }

    async fn close(&self) -> StorageResult<()> {
        Ok(())
    }
}

/// Panics on reads; everything else succeeds trivially.
pub struct PanickingStore;

#[async_trait]
impl DocumentStore for PanickingStore {
    fn backend_name(&self) -> &'static str {
        "panicking"
    }

    async fn find(
        &self,
        collection: &str,
        _filter: &Filter,
        _projection: Option<&Projection>,
    ) -> StorageResult<Vec<Document>> {
        panic!("corrupted index for {collection}");
    }

    async fn insert(&self, _collection: &str, _document: Document) -> StorageResult<DocumentId> {
        Ok(DocumentId::new())
    }

    async fn update(
        &self,
        _collection: &str,
        _filter: &Filter,
        _patch: &Patch,
    ) -> StorageResult<UpdateOutcome> {
        Ok(UpdateOutcome::NO_MATCH)
    }

    async fn delete(&self, _collection: &str, _filter: &Filter) -> StorageResult<DeleteOutcome> {
        Ok(DeleteOutcome::default())
    }

    async fn count(&self, _collection: &str) -> StorageResult<u64> {
        Ok(0)
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        Ok(())
    }
}

/// An in-memory store whose n-th `update` call (1-based) fails; every other call is
/// served by the wrapped [`MemoryBackend`].
pub struct FailingUpdateStore {
    /// The backing store, for seeding and inspection.
    pub inner: MemoryBackend,
    fail_on: usize,
    updates: AtomicUsize,
}

impl FailingUpdateStore {
    pub fn new(fail_on: usize) -> Self {
        Self {
            inner: MemoryBackend::new(),
            fail_on,
            updates: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingUpdateStore {
    fn backend_name(&self) -> &'static str {
        "failing-update"
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> StorageResult<Vec<Document>> {
        self.inner.find(collection, filter, projection).await
    }

    async fn insert(&self, collection: &str, document: Document) -> StorageResult<DocumentId> {
        self.inner.insert(collection, document).await
    }

    async fn update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
    ) -> StorageResult<UpdateOutcome> {
        let call = self.updates.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_on {
            return fault();
        }
        self.inner.update(collection, filter, patch).await
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> StorageResult<DeleteOutcome> {
        self.inner.delete(collection, filter).await
    }

    async fn count(&self, collection: &str) -> StorageResult<u64> {
        self.inner.count(collection).await
    }

    async fn ping(&self) -> StorageResult<()> {
        self.inner.ping().await
    }

    async fn close(&self) -> StorageResult<()> {
        self.inner.close().await
    }
}

/// Reads stall for the given duration before returning nothing.
pub struct SlowStore {
    pub delay: Duration,
}

#[async_trait]
impl DocumentStore for SlowStore {
    fn backend_name(&self) -> &'static str {
        "slow"
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &Filter,
        _projection: Option<&Projection>,
    ) -> StorageResult<Vec<Document>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn insert(&self, _collection: &str, _document: Document) -> StorageResult<DocumentId> {
        Ok(DocumentId::new())
    }

    async fn update(
        &self,
        _collection: &str,
        _filter: &Filter,
        _patch: &Patch,
    ) -> StorageResult<UpdateOutcome> {
        Ok(UpdateOutcome::NO_MATCH)
    }

    async fn delete(&self, _collection: &str, _filter: &Filter) -> StorageResult<DeleteOutcome> {
        Ok(DeleteOutcome::default())
    }

    async fn count(&self, _collection: &str) -> StorageResult<u64> {
        Ok(0)
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        Ok(())
    }
}
