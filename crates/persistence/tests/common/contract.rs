//! Behaviour every document store backend must share.
//!
//! Each function takes a fresh, empty store. Backend test files instantiate the whole
//! suite with [`store_contract_tests!`](crate::store_contract_tests).

use serde_json::json;

use orgdocs_persistence::core::DocumentStore;
use orgdocs_persistence::types::{DocumentId, Filter, Patch, Projection, UpdateOutcome};

use super::fixtures::{book, department, doc, user};

pub async fn insert_then_find_by_id<S: DocumentStore>(store: &S) {
    let id = store.insert("books", book("Dune")).await.unwrap();

    let found = store
        .find_one("books", &Filter::by_id(id), None)
        .await
        .unwrap()
        .expect("inserted document should be found");

    assert_eq!(found.get("_id"), Some(&json!(id.to_hex())));
    assert_eq!(found.get("title"), Some(&json!("Dune")));
    assert_eq!(found.get("tags"), Some(&json!(["scifi", "classic"])));
}

pub async fn find_missing_id_returns_nothing<S: DocumentStore>(store: &S) {
    store.insert("books", book("Dune")).await.unwrap();
    let found = store
        .find_one("books", &Filter::by_id(DocumentId::new()), None)
        .await
        .unwrap();
    assert!(found.is_none());
}

pub async fn list_returns_every_document_in_creation_order<S: DocumentStore>(store: &S) {
    let ids = [
        store.insert("books", book("One")).await.unwrap(),
        store.insert("books", book("Two")).await.unwrap(),
        store.insert("books", book("Three")).await.unwrap(),
    ];

    let all = store.find("books", &Filter::All, None).await.unwrap();
    assert_eq!(all.len(), 3);

    let listed: Vec<String> = all
        .iter()
        .map(|d| d.get("_id").and_then(|v| v.as_str()).unwrap().to_string())
        .collect();
    let expected: Vec<String> = ids.iter().map(DocumentId::to_hex).collect();
    assert_eq!(listed, expected);

    assert_eq!(store.count("books").await.unwrap(), 3);
}

pub async fn projection_limits_fields<S: DocumentStore>(store: &S) {
    let dept = DocumentId::new().to_hex();
    let id = store
        .insert("users", user("Ada Lovelace", &dept, "Engineering"))
        .await
        .unwrap();

    let projection = Projection::include(["name", "employee_id", "position", "department.name"]);
    let listed = store
        .find("users", &Filter::All, Some(&projection))
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(
        serde_json::Value::Object(listed[0].clone()),
        json!({
            "_id": id.to_hex(),
            "name": "Ada Lovelace",
            "employee_id": "E-0001",
            "position": "Engineer",
            "department": {"name": "Engineering"}
        })
    );
}

pub async fn update_reports_matched_and_modified<S: DocumentStore>(store: &S) {
    let id = store.insert("books", book("Dune")).await.unwrap();
    let filter = Filter::by_id(id);

    let patch = Patch::new(doc(json!({"publisher": "Chilton", "year": 1965}))).unwrap();
    let outcome = store.update("books", &filter, &patch).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::matched(true));

    let found = store.find_one("books", &filter, None).await.unwrap().unwrap();
    assert_eq!(found.get("publisher"), Some(&json!("Chilton")));
    assert_eq!(found.get("title"), Some(&json!("Dune")));
}

pub async fn identical_update_matches_without_modifying<S: DocumentStore>(store: &S) {
    let id = store.insert("books", book("Dune")).await.unwrap();

    let patch = Patch::set("title", json!("Dune")).unwrap();
    let outcome = store
        .update("books", &Filter::by_id(id), &patch)
        .await
        .unwrap();

    assert!(outcome.is_match());
    assert!(!outcome.is_modified());
}

pub async fn update_missing_document_matches_nothing<S: DocumentStore>(store: &S) {
    let patch = Patch::set("title", json!("Ghost")).unwrap();
    let outcome = store
        .update("books", &Filter::by_id(DocumentId::new()), &patch)
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::NO_MATCH);
}

pub async fn nested_values_are_replaced_whole<S: DocumentStore>(store: &S) {
    let id = store
        .insert("users", user("Ada", "d1", "Engineering"))
        .await
        .unwrap();

    let patch = Patch::set("department", json!({"id": "d1", "name": "Eng-Renamed"})).unwrap();
    store
        .update("users", &Filter::by_id(id), &patch)
        .await
        .unwrap();

    let found = store
        .find_one("users", &Filter::by_id(id), None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        found.get("department"),
        Some(&json!({"id": "d1", "name": "Eng-Renamed"}))
    );
}

pub async fn delete_then_find_returns_nothing<S: DocumentStore>(store: &S) {
    let id = store.insert("departments", department("Ops")).await.unwrap();

    let outcome = store
        .delete("departments", &Filter::by_id(id))
        .await
        .unwrap();
    assert!(outcome.is_deleted());

    assert!(!store.exists("departments", id).await.unwrap());
    assert_eq!(store.count("departments").await.unwrap(), 0);
}

pub async fn delete_missing_document_deletes_nothing<S: DocumentStore>(store: &S) {
    store.insert("departments", department("Ops")).await.unwrap();

    let outcome = store
        .delete("departments", &Filter::by_id(DocumentId::new()))
        .await
        .unwrap();
    assert!(!outcome.is_deleted());
    assert_eq!(store.count("departments").await.unwrap(), 1);
}

pub async fn collections_are_isolated<S: DocumentStore>(store: &S) {
    let id = store.insert("books", book("Dune")).await.unwrap();

    assert!(!store.exists("departments", id).await.unwrap());
    assert!(store.find("departments", &Filter::All, None).await.unwrap().is_empty());
    assert!(
        !store
            .delete("departments", &Filter::by_id(id))
            .await
            .unwrap()
            .is_deleted()
    );
    assert!(store.exists("books", id).await.unwrap());
}

pub async fn ping_and_close_succeed<S: DocumentStore>(store: &S) {
    store.ping().await.unwrap();
    store.close().await.unwrap();
}

/// Generates one `#[tokio::test]` per contract function for a store factory.
#[macro_export]
macro_rules! store_contract_tests {
    ($factory:expr) => {
        $crate::store_contract_tests!(@tests $factory;
            insert_then_find_by_id,
            find_missing_id_returns_nothing,
            list_returns_every_document_in_creation_order,
            projection_limits_fields,
            update_reports_matched_and_modified,
            identical_update_matches_without_modifying,
            update_missing_document_matches_nothing,
            nested_values_are_replaced_whole,
            delete_then_find_returns_nothing,
            delete_missing_document_deletes_nothing,
            collections_are_isolated,
            ping_and_close_succeed,
        );
    };
    (@tests $factory:expr; $($name:ident),* $(,)?) => {
        $(
            #[tokio::test]
            async fn $name() {
                let store = $factory;
                $crate::common::contract::$name(&store).await;
            }
        )*
    };
}
