//! Behavior every `DocumentStore` backend has to show, run against each of them.

use portfolio_cms::storage::{Document, DocumentStore, Filter, ListOptions, SortKey, StoreError};
use serde_json::{json, Value};

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

fn ids(docs: &[Document]) -> Vec<&str> {
    docs.iter()
        .map(|d| d["id"].as_str().expect("id"))
        .collect()
}

pub async fn create_stamps_timestamps(store: &dyn DocumentStore, collection: &str) {
    store.ensure_collection(collection).await.unwrap();
    let created = store
        .create(collection, doc(json!({"id": "item-1", "name": "first"})))
        .await
        .unwrap();

    assert_eq!(created["id"], "item-1");
    assert_eq!(created["name"], "first");
    assert!(created["created_at"].is_string());
    assert_eq!(created["created_at"], created["updated_at"]);

    let fetched = store.get(collection, "item-1").await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert!(store.get(collection, "missing").await.unwrap().is_none());
}

pub async fn duplicate_ids_are_rejected(store: &dyn DocumentStore, collection: &str) {
    store.ensure_collection(collection).await.unwrap();
    store
        .create(collection, doc(json!({"id": "dup-1"})))
        .await
        .unwrap();
    let err = store
        .create(collection, doc(json!({"id": "dup-1"})))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId { .. }), "got {err:?}");
    assert_eq!(store.count(collection, &Filter::new()).await.unwrap(), 1);
}

pub async fn update_merges_and_advances_updated_at(store: &dyn DocumentStore, collection: &str) {
    store.ensure_collection(collection).await.unwrap();
    let created = store
        .create(
            collection,
            doc(json!({"id": "item-1", "name": "before", "phone": "1", "order": 3})),
        )
        .await
        .unwrap();

    let first = store
        .update(
            collection,
            "item-1",
            doc(json!({"phone": "2", "created_at": "1999-01-01T00:00:00.000000Z", "id": "other"})),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first["id"], "item-1");
    assert_eq!(first["name"], "before");
    assert_eq!(first["order"], 3);
    assert_eq!(first["phone"], "2");
    assert_eq!(first["created_at"], created["created_at"]);
    assert!(first["updated_at"].as_str().unwrap() > created["updated_at"].as_str().unwrap());

    // Back-to-back updates still move updated_at forward.
    let second = store
        .update(collection, "item-1", doc(json!({"phone": "3"})))
        .await
        .unwrap()
        .unwrap();
    assert!(second["updated_at"].as_str().unwrap() > first["updated_at"].as_str().unwrap());

    let missing = store
        .update(collection, "nope", doc(json!({"phone": "4"})))
        .await
        .unwrap();
    assert!(missing.is_none());
}

pub async fn list_filters_sorts_and_windows(store: &dyn DocumentStore, collection: &str) {
    store.ensure_collection(collection).await.unwrap();
    let rows = [
        ("p-1", "nature", 2, true),
        ("p-2", "nature", 1, true),
        ("p-3", "mariage", 1, true),
        ("p-4", "nature", 3, false),
        ("p-5", "nature", 1, true),
    ];
    for (id, category, order, visible) in rows {
        store
            .create(
                collection,
                doc(json!({"id": id, "category": category, "order": order, "is_visible": visible})),
            )
            .await
            .unwrap();
    }

    let filter = Filter::new().eq("category", "nature").eq("is_visible", true);
    let options = ListOptions::filtered(filter.clone()).sorted_by(vec![SortKey::asc("order")]);

    let all = store.list(collection, &options).await.unwrap();
    // Equal sort keys keep insertion order.
    assert_eq!(ids(&all), vec!["p-2", "p-5", "p-1"]);
    assert_eq!(store.count(collection, &filter).await.unwrap(), all.len() as u64);

    let window = store
        .list(collection, &options.clone().skip(1).limit(1))
        .await
        .unwrap();
    assert_eq!(ids(&window), vec!["p-5"]);

    let past_end = store
        .list(collection, &options.clone().skip(10).limit(5))
        .await
        .unwrap();
    assert!(past_end.is_empty());

    let far_past_end = store
        .list(collection, &options.clone().skip(u64::MAX).limit(u64::MAX))
        .await
        .unwrap();
    assert!(far_past_end.is_empty());

    let descending = store
        .list(
            collection,
            &ListOptions::default().sorted_by(vec![SortKey::desc("order")]),
        )
        .await
        .unwrap();
    assert_eq!(ids(&descending), vec!["p-4", "p-1", "p-2", "p-3", "p-5"]);
}

pub async fn delete_removes_once(store: &dyn DocumentStore, collection: &str) {
    store.ensure_collection(collection).await.unwrap();
    store
        .create(collection, doc(json!({"id": "gone-1"})))
        .await
        .unwrap();
    assert!(store.delete(collection, "gone-1").await.unwrap());
    assert!(!store.delete(collection, "gone-1").await.unwrap());
    assert!(store.get(collection, "gone-1").await.unwrap().is_none());
    assert_eq!(store.count(collection, &Filter::new()).await.unwrap(), 0);
}

pub async fn empty_collection_reads_as_empty(store: &dyn DocumentStore, collection: &str) {
    store.ensure_collection(collection).await.unwrap();
    assert!(store
        .list(collection, &ListOptions::default())
        .await
        .unwrap()
        .is_empty());
    assert_eq!(store.count(collection, &Filter::new()).await.unwrap(), 0);
}
