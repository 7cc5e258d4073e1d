//! In-process document store.
//!
//! Same observable behavior as the Postgres store; used by tests and local runs.

use super::{
    check_ident, check_list_options, compare_documents, format_timestamp, record_id,
    strip_protected, timestamp_now, Document, DocumentStore, Filter, ListOptions, StoreError,
    StoreResult, CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Collection {
    next_row: u64,
    /// Kept in insertion (row) order.
    rows: Vec<(u64, Document)>,
}

impl Collection {
    fn position(&self, id: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|(_, doc)| doc.get(ID_FIELD).and_then(JsonValue::as_str) == Some(id))
    }
}

#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn stored_timestamp(doc: &Document, field: &str) -> Option<DateTime<Utc>> {
    doc.get(field)
        .and_then(JsonValue::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn ensure_collection(&self, collection: &str) -> StoreResult<()> {
        check_ident(collection)?;
        let mut collections = self.collections.write().await;
        collections.entry(collection.to_string()).or_default();
        Ok(())
    }

    async fn create(&self, collection: &str, mut record: Document) -> StoreResult<Document> {
        check_ident(collection)?;
        let id = record_id(&record)?;

        let now = JsonValue::String(format_timestamp(&timestamp_now()));
        record.insert(CREATED_AT_FIELD.to_string(), now.clone());
        record.insert(UPDATED_AT_FIELD.to_string(), now);

        let mut collections = self.collections.write().await;
        let coll = collections.entry(collection.to_string()).or_default();
        if coll.position(&id).is_some() {
            return Err(StoreError::DuplicateId {
                collection: collection.to_string(),
                id,
            });
        }
        coll.next_row += 1;
        let row = coll.next_row;
        coll.rows.push((row, record.clone()));
        Ok(record)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        check_ident(collection)?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|coll| coll.position(id).map(|idx| coll.rows[idx].1.clone())))
    }

    async fn list(&self, collection: &str, options: &ListOptions) -> StoreResult<Vec<Document>> {
        check_ident(collection)?;
        check_list_options(options)?;
        let collections = self.collections.read().await;
        let Some(coll) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<&Document> = coll
            .rows
            .iter()
            .map(|(_, doc)| doc)
            .filter(|doc| options.filter.matches(doc))
            .collect();
        // Stable: ties keep insertion order.
        matched.sort_by(|a, b| compare_documents(a, b, &options.sort));

        let skip = options.skip.unwrap_or(0) as usize;
        let limit = options.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(matched
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> StoreResult<Option<Document>> {
        check_ident(collection)?;
        let fields = strip_protected(fields);

        let mut collections = self.collections.write().await;
        let Some(coll) = collections.get_mut(collection) else {
            return Ok(None);
        };
        let Some(idx) = coll.position(id) else {
            return Ok(None);
        };

        let doc = &mut coll.rows[idx].1;
        let mut now = timestamp_now();
        if let Some(previous) = stored_timestamp(doc, UPDATED_AT_FIELD) {
            if now <= previous {
                now = previous + Duration::microseconds(1);
            }
        }
        for (key, value) in fields {
            doc.insert(key, value);
        }
        doc.insert(
            UPDATED_AT_FIELD.to_string(),
            JsonValue::String(format_timestamp(&now)),
        );
        Ok(Some(doc.clone()))
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<bool> {
        check_ident(collection)?;
        let mut collections = self.collections.write().await;
        let Some(coll) = collections.get_mut(collection) else {
            return Ok(false);
        };
        match coll.position(id) {
            Some(idx) => {
                coll.rows.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        check_ident(collection)?;
        for (field, _) in filter.iter() {
            check_ident(field)?;
        }
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|coll| coll.rows.iter().filter(|(_, doc)| filter.matches(doc)).count() as u64)
            .unwrap_or(0))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn close(&self) {}
}
