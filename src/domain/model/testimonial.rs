use super::{default_true, deserialize_some, Resource, Validate};
use crate::storage::{Filter, SortKey};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    /// Soft reference to a category id; never checked for existence.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestimonialPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Validate for Testimonial {}
impl Validate for TestimonialPatch {}

impl Resource for Testimonial {
    const COLLECTION: &'static str = "testimonials";
    const ID_PREFIX: &'static str = "testimonial";
    type Patch = TestimonialPatch;

    fn default_sort() -> Vec<SortKey> {
        vec![SortKey::asc("order"), SortKey::desc("created_at")]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TestimonialFilter {
    pub visible_only: bool,
}

impl From<TestimonialFilter> for Filter {
    fn from(f: TestimonialFilter) -> Self {
        let filter = Filter::new();
        if f.visible_only {
            filter.eq("is_visible", true)
        } else {
            filter
        }
    }
}
