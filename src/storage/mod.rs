pub mod document;

pub use document::{
    Document, DocumentStore, Filter, ListOptions, MemoryDocumentStore, PgDocumentStore, SortKey,
    StoreError, StoreResult,
};
