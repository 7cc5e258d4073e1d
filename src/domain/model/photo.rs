use super::{default_true, deserialize_some, timestamp, Resource, Validate};
use crate::storage::{Filter, SortKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A portfolio image. `image` is the encoded payload (base64 or a data URL),
/// stored inline and passed through unchecked; there is no separate file storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Photo {
    pub title: String,
    pub image: String,
    /// Category id. Soft reference: never checked for existence.
    pub category: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhotoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for Photo {}
impl Validate for PhotoPatch {}

impl Resource for Photo {
    const COLLECTION: &'static str = "photos";
    const ID_PREFIX: &'static str = "photo";
    type Patch = PhotoPatch;

    fn default_sort() -> Vec<SortKey> {
        vec![SortKey::asc("order"), SortKey::desc("date")]
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhotoFilter {
    pub category: Option<String>,
    pub visible_only: bool,
}

impl From<PhotoFilter> for Filter {
    fn from(f: PhotoFilter) -> Self {
        let filter = Filter::new().eq_opt("category", f.category);
        if f.visible_only {
            filter.eq("is_visible", true)
        } else {
            filter
        }
    }
}
