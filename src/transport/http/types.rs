use crate::app::PortfolioService;
use crate::domain::model::ContactStatus;
use crate::domain::Pagination;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PortfolioService>,
}

impl AppState {
    pub fn new(service: Arc<PortfolioService>) -> Self {
        Self { service }
    }
}

/// Success envelope shared by every content endpoint.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[schema(value_type = Object)]
    pub data: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Error body: `{"detail": "..."}`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Readiness probe body (store reachable or not).
#[derive(Serialize, Debug, ToSchema)]
pub struct ReadinessResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_page() -> u64 {
    1
}

fn default_photos_per_page() -> u64 {
    50
}

fn default_contacts_per_page() -> u64 {
    20
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActiveQuery {
    /// Only return entries flagged active.
    #[serde(default = "default_true")]
    #[param(default = true)]
    pub active_only: bool,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VisibleQuery {
    /// Only return entries flagged visible.
    #[serde(default = "default_true")]
    #[param(default = true)]
    pub visible_only: bool,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PhotosQuery {
    /// Category id to filter on.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    #[param(default = true)]
    pub visible_only: bool,
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: u64,
    #[serde(default = "default_photos_per_page")]
    #[param(default = 50, minimum = 1, maximum = 100)]
    pub per_page: u64,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactsQuery {
    #[serde(default)]
    pub status: Option<ContactStatus>,
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: u64,
    #[serde(default = "default_contacts_per_page")]
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub per_page: u64,
}
