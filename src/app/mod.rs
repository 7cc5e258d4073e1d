pub mod portfolio_service;
pub mod seed;

pub use portfolio_service::PortfolioService;
pub use seed::SeedReport;
