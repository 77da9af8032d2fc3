//! DocumentStore implementation for MongoDB.

use async_trait::async_trait;
use bson::{Bson, Document as BsonDocument, doc};
use futures::TryStreamExt;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::DocumentStore;
use crate::error::{BackendError, StorageError, StorageResult, ValidationError};
use crate::types::{
    DeleteOutcome, Document, DocumentId, Filter, ID_FIELD, Patch, Projection, UpdateOutcome,
};

use super::MongoBackend;

fn filter_document(filter: &Filter) -> BsonDocument {
    match filter {
        Filter::All => BsonDocument::new(),
        Filter::ById(id) => doc! { ID_FIELD: *id.as_object_id() },
    }
}

fn projection_document(projection: &Projection) -> BsonDocument {
    let mut fields = doc! { ID_FIELD: 1 };
    for field in projection.fields() {
        fields.insert(field.as_str(), 1);
    }
    fields
}

/// Converts a JSON document to BSON.
///
/// BSON has no unsigned 64-bit integer, so integers above `i64::MAX` are rejected as
/// invalid input.
fn to_bson(document: &Document) -> StorageResult<BsonDocument> {
    bson::to_document(document).map_err(|err| match err {
        bson::ser::Error::UnsignedIntegerExceededRange(value) => {
            ValidationError::NumberOutOfRange {
                value: value.to_string(),
            }
            .into()
        }
        other => other.into(),
    })
}

/// Converts a stored document to JSON, rendering ObjectIds as hex strings.
fn from_bson(mut document: BsonDocument) -> StorageResult<Document> {
    let id = document.remove(ID_FIELD);

    let mut json = match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => map,
        other => {
            return Err(StorageError::Backend(BackendError::SerializationError {
                message: format!("expected a document, got {}", other),
            }));
        }
    };

    match id {
        Some(Bson::ObjectId(oid)) => {
            json.insert(ID_FIELD.to_string(), Value::String(oid.to_hex()));
        }
        Some(other) => {
            json.insert(ID_FIELD.to_string(), other.into_relaxed_extjson());
        }
        None => {}
    }
    Ok(json)
}

#[async_trait]
impl DocumentStore for MongoBackend {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        projection: Option<&Projection>,
    ) -> StorageResult<Vec<Document>> {
        let action = self
            .collection(collection)
            .find(filter_document(filter))
            .sort(doc! { ID_FIELD: 1 });
        let cursor = match projection {
            Some(projection) => action.projection(projection_document(projection)).await?,
            None => action.await?,
        };

        let documents: Vec<BsonDocument> = cursor.try_collect().await?;
        documents.into_iter().map(from_bson).collect()
    }

    async fn insert(&self, collection: &str, mut document: Document) -> StorageResult<DocumentId> {
        document.remove(ID_FIELD);
        let mut bson_document = to_bson(&document)?;

        let id = DocumentId::new();
        bson_document.insert(ID_FIELD, *id.as_object_id());

        self.collection(collection).insert_one(bson_document).await?;

        debug!(collection, id = %id, "Inserted document");
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: &Patch,
    ) -> StorageResult<UpdateOutcome> {
        let set = to_bson(patch.fields())?;
        let result = self
            .collection(collection)
            .update_one(filter_document(filter), doc! { "$set": set })
            .await?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> StorageResult<DeleteOutcome> {
        let result = self
            .collection(collection)
            .delete_one(filter_document(filter))
            .await?;

        Ok(DeleteOutcome {
            deleted: result.deleted_count,
        })
    }

    async fn count(&self, collection: &str) -> StorageResult<u64> {
        Ok(self
            .collection(collection)
            .count_documents(BsonDocument::new())
            .await?)
    }

    async fn ping(&self) -> StorageResult<()> {
        self.database()
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| {
                StorageError::Backend(BackendError::Unavailable {
                    backend_name: "mongodb".to_string(),
                    message: e.to_string(),
                })
            })?;
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        info!(database = %self.config().database, "Closing MongoDB client");
        self.client().clone().shutdown().await;
        Ok(())
    }
}
