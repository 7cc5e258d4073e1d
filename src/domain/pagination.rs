use crate::domain::error::ValidationError;
use serde::Serialize;
use utoipa::ToSchema;

/// Upper bound on `per_page` accepted from clients.
pub const MAX_PER_PAGE: u64 = 100;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::new("page", "must be greater than or equal to 1"));
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(ValidationError::new(
                "per_page",
                format!("must be between 1 and {}", MAX_PER_PAGE),
            ));
        }
        Ok(Self { page, per_page })
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(total: u64, request: PageRequest) -> Self {
        Self {
            total,
            page: request.page,
            per_page: request.per_page(),
            total_pages: total.div_ceil(request.per_page()),
        }
    }
}

/// One page of results plus the block describing it.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}
