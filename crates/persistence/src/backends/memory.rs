//! In-memory document store.
//!
//! Collections live in process-local ordered maps keyed by [`DocumentId`], so listing
//! returns documents in creation order. Nothing survives a restart; use this backend for
//! tests and throwaway deployments.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::DocumentStore;
use crate::error::StorageResult;
use crate::types::{
    DeleteOutcome, Document, DocumentId, Filter, ID_FIELD, Patch, Projection, UpdateOutcome,
};

type Collection = BTreeMap<DocumentId, Document>;

/// Process-local document store.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryBackend {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn first_match(collection: &Collection, filter: &Filter) -> Option<DocumentId> {
        match filter {
            Filter::All => collection.keys().next().copied(),
            Filter::ById(id) => collection.contains_key(id).then_some(*id),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> StorageResult<Vec<Document>> {
        let collections = self.collections.read();
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let render = |doc: &Document| match projection {
            Some(projection) => projection.apply(doc),
            None => doc.clone(),
        };

        let found = match filter {
            Filter::All => documents.values().map(render).collect(),
            Filter::ById(id) => documents.get(id).map(render).into_iter().collect(),
        };
        Ok(found)
    }

    async fn insert(&self, collection: &str, mut document: Document) -> StorageResult<DocumentId> {
        let id = DocumentId::new();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));

        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(id, document);

        debug!(collection, id = %id, "Inserted document");
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
    ) -> StorageResult<UpdateOutcome> {
        let mut collections = self.collections.write();
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(UpdateOutcome::NO_MATCH);
        };
        let Some(id) = Self::first_match(documents, filter) else {
            return Ok(UpdateOutcome::NO_MATCH);
        };

        let modified = documents
            .get_mut(&id)
            .map(|document| patch.apply_to(document))
            .unwrap_or(false);
        Ok(UpdateOutcome::matched(modified))
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> StorageResult<DeleteOutcome> {
        let mut collections = self.collections.write();
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(DeleteOutcome::default());
        };

        let deleted = Self::first_match(documents, filter)
            .and_then(|id| documents.remove(&id))
            .map_or(0, |_| 1);
        Ok(DeleteOutcome { deleted })
    }

    async fn count(&self, collection: &str) -> StorageResult<u64> {
        let collections = self.collections.read();
        Ok(collections
            .get(collection)
            .map_or(0, |documents| documents.len() as u64))
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        let collections = self.collections.read();
        info!(
            collections = collections.len(),
            "Closing in-memory store; contents are discarded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_id() {
        let store = MemoryBackend::new();
        let id = store
            .insert("books", doc(json!({"_id": "client-chosen", "title": "Dune"})))
            .await
            .unwrap();

        let found = store
            .find_one("books", &Filter::by_id(id), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("_id"), Some(&json!(id.to_hex())));
        assert_eq!(found.get("title"), Some(&json!("Dune")));
    }

    #[tokio::test]
    async fn test_unknown_collection_is_empty() {
        let store = MemoryBackend::new();
        assert!(store.find("nothing", &Filter::All, None).await.unwrap().is_empty());
        assert_eq!(store.count("nothing").await.unwrap(), 0);

        let patch = Patch::set("a", json!(1)).unwrap();
        let outcome = store
            .update("nothing", &Filter::by_id(DocumentId::new()), &patch)
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::NO_MATCH);
        assert!(!store.delete("nothing", &Filter::All).await.unwrap().is_deleted());
    }

    #[tokio::test]
    async fn test_filter_all_updates_first_document_only() {
        let store = MemoryBackend::new();
        let first = store.insert("books", doc(json!({"n": 1}))).await.unwrap();
        let second = store.insert("books", doc(json!({"n": 2}))).await.unwrap();

        let patch = Patch::set("n", json!(10)).unwrap();
        let outcome = store.update("books", &Filter::All, &patch).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::matched(true));

        let first_doc = store.find_one("books", &Filter::by_id(first), None).await.unwrap();
        let second_doc = store.find_one("books", &Filter::by_id(second), None).await.unwrap();
        assert_eq!(first_doc.unwrap().get("n"), Some(&json!(10)));
        assert_eq!(second_doc.unwrap().get("n"), Some(&json!(2)));
    }
}
