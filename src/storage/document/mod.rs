//! Collection-agnostic document persistence.
//!
//! Documents are JSON objects addressed by an application-level string `id`
//! field. Backends keep their own internal row key next to it; that key never
//! leaves the backend.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A stored document: a JSON object.
pub type Document = serde_json::Map<String, JsonValue>;

pub const ID_FIELD: &str = "id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("document with id '{id}' already exists in '{collection}'")]
    DuplicateId { collection: String, id: String },
    #[error("invalid field or collection name '{0}'")]
    InvalidField(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Postgres `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";

impl StoreError {
    /// True when the backing table of a collection does not exist yet.
    pub fn is_missing_collection(&self) -> bool {
        match self {
            StoreError::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some(UNDEFINED_TABLE)
            }
            _ => false,
        }
    }
}

/// Equality-conjunction predicate: every listed field must equal its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: BTreeMap<String, JsonValue>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `field == value` to the conjunction.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Adds `field == value` only when `value` is present.
    pub fn eq_opt(self, field: impl Into<String>, value: Option<impl Into<JsonValue>>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.fields.iter()
    }

    /// Returns true when `doc` satisfies every clause.
    pub fn matches(&self, doc: &Document) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| doc.get(field).is_some_and(|v| json_eq(v, expected)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One key of a multi-key sort. The first key in a list is the primary one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Options for [`DocumentStore::list`]. `limit: None` means unbounded.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub filter: Filter,
    pub sort: Vec<SortKey>,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
}

impl ListOptions {
    pub fn filtered(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, sort: Vec<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }
}

/// Persistence operations shared by every collection.
///
/// Implementations must be safe to share across concurrently running requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates the backing storage for `collection` if it does not exist yet.
    async fn ensure_collection(&self, collection: &str) -> StoreResult<()>;

    /// Stamps `created_at`/`updated_at`, inserts `record` and returns the stored document.
    ///
    /// `record` must carry a string `id` that is not yet used in the collection.
    async fn create(&self, collection: &str, record: Document) -> StoreResult<Document>;

    /// Point lookup by the application `id` field.
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    async fn list(&self, collection: &str, options: &ListOptions) -> StoreResult<Vec<Document>>;

    /// Shallow-merges `fields` into the document and refreshes `updated_at`.
    ///
    /// `id`, `created_at` and `updated_at` inside `fields` are ignored. Returns `None`
    /// when nothing matched `id`.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> StoreResult<Option<Document>>;

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<bool>;

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

    /// Cheap round-trip to the backend.
    async fn ping(&self) -> StoreResult<()>;

    /// Releases backend resources. Further calls fail.
    async fn close(&self);
}

/// Current time truncated to the precision timestamps are stored with.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width RFC 3339 rendering, so lexical order matches chronological order.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn validate_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn check_ident(ident: &str) -> StoreResult<()> {
    if validate_ident(ident) {
        Ok(())
    } else {
        Err(StoreError::InvalidField(ident.to_string()))
    }
}

pub(crate) fn check_list_options(options: &ListOptions) -> StoreResult<()> {
    for (field, _) in options.filter.iter() {
        check_ident(field)?;
    }
    for key in &options.sort {
        check_ident(&key.field)?;
    }
    Ok(())
}

/// Extracts the string `id` of a record about to be inserted.
pub(crate) fn record_id(record: &Document) -> StoreResult<String> {
    match record.get(ID_FIELD) {
        Some(JsonValue::String(id)) if !id.is_empty() => Ok(id.clone()),
        _ => Err(StoreError::InvalidRecord(
            "record must carry a non-empty string 'id'".to_string(),
        )),
    }
}

/// Removes the fields callers may not overwrite through an update.
pub(crate) fn strip_protected(mut fields: Document) -> Document {
    fields.remove(ID_FIELD);
    fields.remove(CREATED_AT_FIELD);
    fields.remove(UPDATED_AT_FIELD);
    fields
}

/// JSON equality where numbers compare by value (`2 == 2.0`).
pub fn json_eq(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Number(x), JsonValue::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

fn type_rank(v: &JsonValue) -> u8 {
    match v {
        JsonValue::Null => 0,
        JsonValue::String(_) => 1,
        JsonValue::Number(_) => 2,
        JsonValue::Bool(_) => 3,
        JsonValue::Array(_) => 4,
        JsonValue::Object(_) => 5,
    }
}

/// Total order over JSON values mirroring Postgres `jsonb` ordering.
///
/// Missing values compare as `null`.
pub fn compare_json(a: Option<&JsonValue>, b: Option<&JsonValue>) -> Ordering {
    let a = a.unwrap_or(&JsonValue::Null);
    let b = b.unwrap_or(&JsonValue::Null);
    match (a, b) {
        (JsonValue::String(x), JsonValue::String(y)) => x.cmp(y),
        (JsonValue::Number(x), JsonValue::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (JsonValue::Bool(x), JsonValue::Bool(y)) => x.cmp(y),
        (JsonValue::Array(x), JsonValue::Array(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y.iter())
                .map(|(l, r)| compare_json(Some(l), Some(r)))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        }),
        (JsonValue::Object(x), JsonValue::Object(y)) => x
            .len()
            .cmp(&y.len())
            .then_with(|| a.to_string().cmp(&b.to_string())),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Compares two documents under a multi-key sort.
pub fn compare_documents(a: &Document, b: &Document, sort: &[SortKey]) -> Ordering {
    for key in sort {
        let ord = compare_json(a.get(&key.field), b.get(&key.field));
        let ord = match key.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
