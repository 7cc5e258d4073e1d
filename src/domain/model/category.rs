use super::{default_true, deserialize_some, Resource, Validate};
use crate::storage::{Filter, SortKey};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A portfolio section (weddings, nature, food...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub cover_image: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for Category {}
impl Validate for CategoryPatch {}

impl Resource for Category {
    const COLLECTION: &'static str = "categories";
    const ID_PREFIX: &'static str = "category";
    type Patch = CategoryPatch;

    fn default_sort() -> Vec<SortKey> {
        vec![SortKey::asc("order"), SortKey::asc("name")]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFilter {
    pub active_only: bool,
}

impl From<CategoryFilter> for Filter {
    fn from(f: CategoryFilter) -> Self {
        let filter = Filter::new();
        if f.active_only {
            filter.eq("is_active", true)
        } else {
            filter
        }
    }
}
