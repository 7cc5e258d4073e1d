pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{PortfolioService, SeedReport};
pub use domain::model::{Category, Contact, Photo, Photographer, Record, Service, Testimonial};
pub use domain::{Repository, RepositoryError};
pub use infra::AppConfig;
pub use storage::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
