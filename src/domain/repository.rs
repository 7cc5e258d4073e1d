//! Typed access to one collection.
//!
//! `Repository<Category>`, `Repository<Photo>`... all share the same
//! [`DocumentStore`] handle; the type parameter fixes the collection, the id
//! prefix, the default sort and the (de)serialization of documents.

use crate::domain::error::{RepositoryError, RepositoryResult};
use crate::domain::ids::IdGenerator;
use crate::domain::model::{Record, Resource, Validate};
use crate::domain::pagination::{Page, PageRequest, Pagination};
use crate::storage::{Document, DocumentStore, Filter, ListOptions, StoreError};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::marker::PhantomData;
use std::sync::Arc;

/// Extra attempts with a fresh id when an insert collides with an existing one.
const ID_COLLISION_RETRIES: usize = 3;

pub struct Repository<R> {
    store: Arc<dyn DocumentStore>,
    ids: Arc<IdGenerator>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            ids: self.ids.clone(),
            _resource: PhantomData,
        }
    }
}

fn to_document<T: Serialize>(value: &T) -> RepositoryResult<Document> {
    match serde_json::to_value(value).map_err(StoreError::from)? {
        JsonValue::Object(doc) => Ok(doc),
        other => Err(StoreError::InvalidRecord(format!("expected a JSON object, got {}", other)).into()),
    }
}

impl<R: Resource> Repository<R> {
    pub fn new(store: Arc<dyn DocumentStore>, ids: Arc<IdGenerator>) -> Self {
        Self {
            store,
            ids,
            _resource: PhantomData,
        }
    }

    pub fn collection(&self) -> &'static str {
        R::COLLECTION
    }

    fn decode(&self, doc: Document) -> RepositoryResult<Record<R>> {
        serde_json::from_value(JsonValue::Object(doc)).map_err(|source| RepositoryError::Decode {
            collection: R::COLLECTION,
            source,
        })
    }

    /// Validates `data`, assigns a fresh id and stores it.
    pub async fn create(&self, data: R) -> RepositoryResult<Record<R>> {
        data.validate()?;
        let body = to_document(&data)?;

        let mut attempt = 0;
        loop {
            let id = self.ids.next(R::ID_PREFIX);
            let mut doc = body.clone();
            doc.insert("id".to_string(), JsonValue::String(id.clone()));
            match self.store.create(R::COLLECTION, doc).await {
                Ok(stored) => return self.decode(stored),
                Err(StoreError::DuplicateId { .. }) if attempt < ID_COLLISION_RETRIES => {
                    tracing::warn!(collection = R::COLLECTION, %id, "generated id already taken, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Stores `data` under a caller-chosen id (default content).
    pub async fn insert_with_id(&self, id: &str, data: R) -> RepositoryResult<Record<R>> {
        let mut doc = to_document(&data)?;
        doc.insert("id".to_string(), JsonValue::String(id.to_string()));
        let stored = self.store.create(R::COLLECTION, doc).await?;
        self.decode(stored)
    }

    pub async fn get(&self, id: &str) -> RepositoryResult<Option<Record<R>>> {
        match self.store.get(R::COLLECTION, id).await? {
            Some(doc) => self.decode(doc).map(Some),
            None => Ok(None),
        }
    }

    /// First document in insertion order; used for singleton collections.
    pub async fn first(&self) -> RepositoryResult<Option<Record<R>>> {
        let docs = self
            .store
            .list(R::COLLECTION, &ListOptions::default().limit(1))
            .await?;
        match docs.into_iter().next() {
            Some(doc) => self.decode(doc).map(Some),
            None => Ok(None),
        }
    }

    /// Every matching document, in the resource's default order.
    pub async fn list(&self, filter: impl Into<Filter>) -> RepositoryResult<Vec<Record<R>>> {
        let options = ListOptions::filtered(filter.into()).sorted_by(R::default_sort());
        let docs = self.store.list(R::COLLECTION, &options).await?;
        docs.into_iter().map(|doc| self.decode(doc)).collect()
    }

    /// One page of matching documents plus the total match count.
    pub async fn page(
        &self,
        filter: impl Into<Filter>,
        request: PageRequest,
    ) -> RepositoryResult<Page<Record<R>>> {
        let filter = filter.into();
        let options = ListOptions::filtered(filter.clone())
            .sorted_by(R::default_sort())
            .skip(request.skip())
            .limit(request.per_page());

        let docs = self.store.list(R::COLLECTION, &options).await?;
        let total = self.store.count(R::COLLECTION, &filter).await?;
        let items = docs
            .into_iter()
            .map(|doc| self.decode(doc))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(Page {
            items,
            pagination: Pagination::new(total, request),
        })
    }

    /// Applies the fields present in `patch`; everything else is left as stored.
    pub async fn update(&self, id: &str, patch: &R::Patch) -> RepositoryResult<Option<Record<R>>> {
        patch.validate()?;
        let fields = to_document(patch)?;
        match self.store.update(R::COLLECTION, id, fields).await? {
            Some(doc) => self.decode(doc).map(Some),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: &str) -> RepositoryResult<bool> {
        Ok(self.store.delete(R::COLLECTION, id).await?)
    }

    pub async fn count(&self, filter: impl Into<Filter>) -> RepositoryResult<u64> {
        Ok(self.store.count(R::COLLECTION, &filter.into()).await?)
    }

    pub async fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.count(Filter::new()).await? == 0)
    }
}
