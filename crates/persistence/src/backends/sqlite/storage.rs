//! DocumentStore implementation for SQLite.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use serde_json::Value;
use tracing::{debug, info};

use crate::core::DocumentStore;
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{
    DeleteOutcome, Document, DocumentId, Filter, ID_FIELD, Patch, Projection, UpdateOutcome,
};

use super::SqliteBackend;

fn serialization_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::SerializationError { message })
}

fn decode_document(data: &[u8]) -> StorageResult<Document> {
    serde_json::from_slice(data)
        .map_err(|e| serialization_error(format!("Failed to deserialize document: {}", e)))
}

fn encode_document(document: &Document) -> StorageResult<Vec<u8>> {
    serde_json::to_vec(document)
        .map_err(|e| serialization_error(format!("Failed to serialize document: {}", e)))
}

/// Loads the id and data of the first row passing the filter.
fn select_first(
    conn: &Connection,
    collection: &str,
    filter: &Filter,
) -> StorageResult<Option<(String, Vec<u8>)>> {
    let row = match filter {
        Filter::All => conn
            .query_row(
                "SELECT id, data FROM documents WHERE collection = ?1 ORDER BY id LIMIT 1",
                params![collection],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?,
        Filter::ById(id) => conn
            .query_row(
                "SELECT id, data FROM documents WHERE collection = ?1 AND id = ?2",
                params![collection, id.to_hex()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?,
    };
    Ok(row)
}

#[async_trait]
impl DocumentStore for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> StorageResult<Vec<Document>> {
        let conn = self.get_connection()?;

        let rows: Vec<Vec<u8>> = match filter {
            Filter::All => {
                let mut stmt = conn.prepare(
                    "SELECT data FROM documents WHERE collection = ?1 ORDER BY id",
                )?;
                let rows = stmt
                    .query_map(params![collection], |row| row.get(0))?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            Filter::ById(id) => conn
                .query_row(
                    "SELECT data FROM documents WHERE collection = ?1 AND id = ?2",
                    params![collection, id.to_hex()],
                    |row| row.get(0),
                )
                .optional()?
                .into_iter()
                .collect(),
        };

        rows.iter()
            .map(|data| {
                let document = decode_document(data)?;
                Ok(match projection {
                    Some(projection) => projection.apply(&document),
                    None => document,
                })
            })
            .collect()
    }

    async fn insert(&self, collection: &str, mut document: Document) -> StorageResult<DocumentId> {
        let conn = self.get_connection()?;

        let id = DocumentId::new();
        document.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
        let data = encode_document(&document)?;
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO documents (collection, id, data, created_at, last_updated)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![collection, id.to_hex(), data, now],
        )?;

        debug!(collection, id = %id, "Inserted document");
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
    ) -> StorageResult<UpdateOutcome> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let Some((row_id, data)) = select_first(&tx, collection, filter)? else {
            return Ok(UpdateOutcome::NO_MATCH);
        };

        let mut document = decode_document(&data)?;
        let modified = patch.apply_to(&mut document);

        if modified {
            let data = encode_document(&document)?;
            tx.execute(
                "UPDATE documents SET data = ?1, last_updated = ?2
                 WHERE collection = ?3 AND id = ?4",
                params![data, Utc::now().to_rfc3339(), collection, row_id],
            )?;
        }
        tx.commit()?;

        Ok(UpdateOutcome::matched(modified))
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> StorageResult<DeleteOutcome> {
        let conn = self.get_connection()?;

        let deleted = match filter {
            Filter::All => conn.execute(
                "DELETE FROM documents WHERE collection = ?1 AND id = (
                     SELECT id FROM documents WHERE collection = ?1 ORDER BY id LIMIT 1
                 )",
                params![collection],
            )?,
            Filter::ById(id) => conn.execute(
                "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
                params![collection, id.to_hex()],
            )?,
        };

        Ok(DeleteOutcome {
            deleted: deleted as u64,
        })
    }

    async fn count(&self, collection: &str) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            params![collection],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    async fn ping(&self) -> StorageResult<()> {
        self.health_check().map_err(StorageError::Backend)
    }

    async fn close(&self) -> StorageResult<()> {
        let state = self.pool_state();
        info!(
            connections = state.connections,
            idle = state.idle_connections,
            "Closing SQLite store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_backend() -> SqliteBackend {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();
        backend
    }

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let backend = create_test_backend();
        let id = backend
            .insert("books", doc(json!({"title": "Dune"})))
            .await
            .unwrap();

        let found = backend
            .find_one("books", &Filter::by_id(id), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get("_id"), Some(&json!(id.to_hex())));
        assert_eq!(found.get("title"), Some(&json!("Dune")));
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let backend = create_test_backend();
        let id = backend.insert("books", doc(json!({"a": 1}))).await.unwrap();

        assert_eq!(backend.count("books").await.unwrap(), 1);
        assert_eq!(backend.count("users").await.unwrap(), 0);
        assert!(
            backend
                .find_one("users", &Filter::by_id(id), None)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_update_touches_last_updated_only_when_modified() {
        let backend = create_test_backend();
        let id = backend.insert("books", doc(json!({"a": 1}))).await.unwrap();

        let read_last_updated = || {
            let conn = backend.get_connection().unwrap();
            conn.query_row(
                "SELECT last_updated FROM documents WHERE id = ?1",
                params![id.to_hex()],
                |row| row.get::<_, String>(0),
            )
            .unwrap()
        };
        let before = read_last_updated();

        let patch = Patch::set("a", json!(1)).unwrap();
        let outcome = backend.update("books", &Filter::by_id(id), &patch).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::matched(false));
        assert_eq!(read_last_updated(), before);
    }

    #[tokio::test]
    async fn test_delete_with_filter_all_removes_oldest() {
        let backend = create_test_backend();
        let first = backend.insert("books", doc(json!({"n": 1}))).await.unwrap();
        let second = backend.insert("books", doc(json!({"n": 2}))).await.unwrap();

        let outcome = backend.delete("books", &Filter::All).await.unwrap();
        assert!(outcome.is_deleted());
        assert!(!backend.exists("books", first).await.unwrap());
        assert!(backend.exists("books", second).await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_row_is_serialization_error() {
        let backend = create_test_backend();
        let id = DocumentId::new();
        {
            let conn = backend.get_connection().unwrap();
            conn.execute(
                "INSERT INTO documents (collection, id, data, created_at, last_updated)
                 VALUES ('books', ?1, X'7B7B', 'now', 'now')",
                params![id.to_hex()],
            )
            .unwrap();
        }

        let err = backend
            .find("books", &Filter::All, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::Backend(BackendError::SerializationError { .. })
        ));
    }

    #[tokio::test]
    async fn test_ping_and_close() {
        let backend = create_test_backend();
        backend.ping().await.unwrap();
        backend.close().await.unwrap();
    }
}
