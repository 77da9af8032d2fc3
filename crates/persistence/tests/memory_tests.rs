//! In-memory backend integration tests.

mod common;

use std::sync::Arc;

use serde_json::json;

use orgdocs_persistence::backends::memory::MemoryBackend;
use orgdocs_persistence::core::DocumentStore;
use orgdocs_persistence::types::{Filter, Patch};

use common::book;

store_contract_tests!(MemoryBackend::new());

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_inserts_are_all_kept() {
    let store = Arc::new(MemoryBackend::new());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.insert("books", book(&format!("Book {i}"))).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.count("books").await.unwrap(), 20);
}

#[tokio::test]
async fn test_concurrent_updates_to_one_document() {
    let store = Arc::new(MemoryBackend::new());
    let id = store.insert("books", book("Dune")).await.unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let patch = Patch::set(format!("field_{i}"), json!(i)).unwrap();
                store.update("books", &Filter::by_id(id), &patch).await
            })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        assert!(outcome.is_modified());
    }

    let found = store
        .find_one("books", &Filter::by_id(id), None)
        .await
        .unwrap()
        .unwrap();
    for i in 0..10 {
        assert_eq!(found.get(&format!("field_{i}")), Some(&json!(i)));
    }
}
