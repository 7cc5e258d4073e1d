pub mod error;
pub mod ids;
pub mod model;
pub mod pagination;
pub mod repository;

pub use error::{RepositoryError, RepositoryResult, ValidationError};
pub use ids::IdGenerator;
pub use pagination::{Page, PageRequest, Pagination, MAX_PER_PAGE};
pub use repository::Repository;
