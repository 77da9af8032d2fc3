//! Generic create/read/update/delete over one collection.

use std::sync::Arc;

use orgdocs_persistence::core::DocumentStore;
use orgdocs_persistence::error::{ResourceError, StorageResult};
use orgdocs_persistence::schema::{apply_defaults, validate_document};
use orgdocs_persistence::types::{Document, DocumentId, Filter, Patch};
use tracing::debug;

use super::outcome::{Created, Deleted, Updated};
use super::spec::ResourceSpec;

/// Builds the not-found error for a resource kind.
pub(crate) fn not_found(spec: &ResourceSpec, id: DocumentId) -> ResourceError {
    ResourceError::NotFound {
        resource: spec.label.to_string(),
        id: id.to_hex(),
    }
}

/// CRUD operations for the resource kind described by a [`ResourceSpec`].
pub struct CrudService<S> {
    store: Arc<S>,
    spec: &'static ResourceSpec,
}

impl<S: DocumentStore> CrudService<S> {
    /// Creates a service over an injected store.
    pub fn new(store: Arc<S>, spec: &'static ResourceSpec) -> Self {
        Self { store, spec }
    }

    /// Returns the resource descriptor.
    pub fn spec(&self) -> &'static ResourceSpec {
        self.spec
    }

    /// Returns every document in the collection.
    pub async fn list(&self) -> StorageResult<Vec<Document>> {
        self.store.find(self.spec.collection, &Filter::All, None).await
    }

    /// Returns one document.
    pub async fn get(&self, id: DocumentId) -> StorageResult<Document> {
        self.store
            .find_one(self.spec.collection, &Filter::by_id(id), None)
            .await?
            .ok_or_else(|| not_found(self.spec, id).into())
    }

    /// Validates (when the resource has a schema) and inserts a document.
    pub async fn create(&self, mut document: Document) -> StorageResult<Created> {
        if let Some(schema) = self.spec.schema {
            validate_document(&document, schema)?;
            apply_defaults(&mut document, schema);
        }

        let id = self.store.insert(self.spec.collection, document).await?;
        debug!(collection = self.spec.collection, id = %id, "Document created");
        Ok(Created::new(self.spec.label, id))
    }

    /// Merges the given fields into a stored document.
    ///
    /// A patch repeating the stored values still succeeds, with `modified: false`.
    pub async fn update(&self, id: DocumentId, fields: Document) -> StorageResult<Updated> {
        let patch = Patch::new(fields)?;
        let outcome = self
            .store
            .update(self.spec.collection, &Filter::by_id(id), &patch)
            .await?;

        if !outcome.is_match() {
            return Err(not_found(self.spec, id).into());
        }
        Ok(Updated::new(self.spec.label, outcome.is_modified()))
    }

    /// Removes a document.
    pub async fn delete(&self, id: DocumentId) -> StorageResult<Deleted> {
        let outcome = self
            .store
            .delete(self.spec.collection, &Filter::by_id(id))
            .await?;

        if !outcome.is_deleted() {
            return Err(not_found(self.spec, id).into());
        }
        Ok(Deleted::new(self.spec.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::spec::{BOOKS, DEPARTMENTS, PERMISSIONS};
    use orgdocs_persistence::backends::memory::MemoryBackend;
    use orgdocs_persistence::error::{StorageError, ValidationError};
    use serde_json::{Value, json};

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn service(spec: &'static ResourceSpec) -> CrudService<MemoryBackend> {
        CrudService::new(Arc::new(MemoryBackend::new()), spec)
    }

    #[tokio::test]
    async fn test_book_create_accepts_any_object() {
        let books = service(&BOOKS);
        let created = books.create(doc(json!({"anything": [1, 2]}))).await.unwrap();
        assert_eq!(created.message, "Book created successfully");

        let stored = books.get(created.id).await.unwrap();
        assert_eq!(stored.get("anything"), Some(&json!([1, 2])));
    }

    #[tokio::test]
    async fn test_department_defaults_parent() {
        let departments = service(&DEPARTMENTS);
        let created = departments
            .create(doc(json!({"name": "Engineering"})))
            .await
            .unwrap();

        let stored = departments.get(created.id).await.unwrap();
        assert_eq!(stored.get("parent"), Some(&json!("")));
    }

    #[tokio::test]
    async fn test_invalid_permission_group_is_not_stored() {
        let permissions = service(&PERMISSIONS);
        let err = permissions
            .create(doc(json!({"name": "admins", "permissions": "all"})))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            StorageError::Validation(ValidationError::InvalidType { .. })
        ));
        assert!(permissions.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_identical_values_is_not_a_miss() {
        let books = service(&BOOKS);
        let created = books.create(doc(json!({"title": "Dune"}))).await.unwrap();

        let updated = books
            .update(created.id, doc(json!({"title": "Dune"})))
            .await
            .unwrap();
        assert!(!updated.modified);
        assert_eq!(updated.message, "Book updated successfully");
    }

    #[tokio::test]
    async fn test_missing_documents_report_not_found() {
        let books = service(&BOOKS);
        let id = DocumentId::new();

        for err in [
            books.get(id).await.unwrap_err(),
            books
                .update(id, doc(json!({"title": "x"})))
                .await
                .unwrap_err(),
            books.delete(id).await.unwrap_err(),
        ] {
            assert_eq!(err.to_string(), "Book not found");
        }
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let departments = service(&DEPARTMENTS);
        let created = departments
            .create(doc(json!({"name": "Ops", "parent": "Engineering"})))
            .await
            .unwrap();

        let deleted = departments.delete(created.id).await.unwrap();
        assert_eq!(deleted.message, "Department deleted successfully");
        assert!(departments.get(created.id).await.is_err());
    }
}
