pub mod error;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod categories;
    pub mod common;
    pub mod contact;
    pub mod health;
    pub mod photographer;
    pub mod photos;
    pub mod services;
    pub mod testimonials;
}

pub use error::{AppError, AppResult};
pub use router::{build_app, create_router, ApiDoc};
pub use types::AppState;
