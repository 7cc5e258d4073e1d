use super::{default_true, Resource, Validate};
use crate::storage::{Filter, SortKey};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bookable offering. `price` and `duration` are display text ("À partir de 300€").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServicePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for Service {}
impl Validate for ServicePatch {}

impl Resource for Service {
    const COLLECTION: &'static str = "services";
    const ID_PREFIX: &'static str = "service";
    type Patch = ServicePatch;

    fn default_sort() -> Vec<SortKey> {
        vec![SortKey::asc("order"), SortKey::asc("name")]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceFilter {
    pub active_only: bool,
}

impl From<ServiceFilter> for Filter {
    fn from(f: ServiceFilter) -> Self {
        let filter = Filter::new();
        if f.active_only {
            filter.eq("is_active", true)
        } else {
            filter
        }
    }
}
