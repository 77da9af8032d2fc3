//! Core document store trait.
//!
//! This module defines the [`DocumentStore`] trait, the uniform find/insert/update/delete
//! surface every backend provides over named collections.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{DeleteOutcome, Document, DocumentId, Filter, Patch, Projection, UpdateOutcome};

/// Uniform access to named collections of JSON documents.
///
/// Every operation returns a [`StorageResult`]. A write that affects no document is a
/// normal `Ok` outcome ([`UpdateOutcome::NO_MATCH`], a zero [`DeleteOutcome`]); an
/// `Err` always means the operation itself could not be carried out.
///
/// Updates and deletes touch at most one document, even under [`Filter::All`].
///
/// # Example
///
/// ```ignore
/// use orgdocs_persistence::core::DocumentStore;
/// use orgdocs_persistence::types::{Filter, Patch};
///
/// async fn example<S: DocumentStore>(store: &S) -> StorageResult<()> {
///     let book = serde_json::json!({"title": "Dune"});
///     let id = store.insert("books", book.as_object().unwrap().clone()).await?;
///
///     let found = store.find_one("books", &Filter::by_id(id), None).await?;
///     assert!(found.is_some());
///
///     let patch = Patch::set("year", serde_json::json!(1965))?;
///     let outcome = store.update("books", &Filter::by_id(id), &patch).await?;
///     assert!(outcome.is_modified());
///
///     store.delete("books", &Filter::by_id(id)).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every document in `collection` that passes `filter`.
    ///
    /// With a projection, each document only carries `_id` and the projected paths.
    /// Documents come back in creation order.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> StorageResult<Vec<Document>>;

    /// Returns the first document that passes `filter`, if any.
    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> StorageResult<Option<Document>> {
        Ok(self
            .find(collection, filter, projection)
            .await?
            .into_iter()
            .next())
    }

    /// Checks whether a document with this identifier exists.
    async fn exists(&self, collection: &str, id: DocumentId) -> StorageResult<bool> {
        Ok(self
            .find_one(collection, &Filter::by_id(id), None)
            .await?
            .is_some())
    }

    /// Inserts a document and returns its newly assigned identifier.
    ///
    /// Any `_id` already present in `document` is replaced by the new identifier.
    async fn insert(&self, collection: &str, document: Document) -> StorageResult<DocumentId>;

    /// Applies a merge patch to the first document that passes `filter`.
    ///
    /// `modified` is 0 when every patched value already equals the stored one.
    async fn update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
    ) -> StorageResult<UpdateOutcome>;

    /// Removes the first document that passes `filter`.
    async fn delete(&self, collection: &str, filter: &Filter) -> StorageResult<DeleteOutcome>;

    /// Counts the documents in `collection`.
    async fn count(&self, collection: &str) -> StorageResult<u64>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StorageResult<()>;

    /// Releases backend resources. Called once at shutdown.
    async fn close(&self) -> StorageResult<()>;
}
