//! Content types served by the portfolio API.
//!
//! Each type is the field set a client supplies on create; [`Record`] adds the
//! service-owned base fields (`id`, `created_at`, `updated_at`). Every type has a
//! matching patch type in which all fields are optional.

use crate::domain::error::ValidationError;
use crate::storage::SortKey;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub mod category;
pub mod contact;
pub mod photo;
pub mod photographer;
pub mod service;
pub mod testimonial;
pub mod timestamp;

pub use category::{Category, CategoryFilter, CategoryPatch};
pub use contact::{Contact, ContactFilter, ContactPatch, ContactStatus};
pub use photo::{Photo, PhotoFilter, PhotoPatch};
pub use photographer::{Photographer, PhotographerPatch};
pub use service::{Service, ServiceFilter, ServicePatch};
pub use testimonial::{Testimonial, TestimonialFilter, TestimonialPatch};

/// A stored document of kind `R`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<R> {
    pub id: String,
    #[serde(flatten)]
    pub data: R,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Field-level checks serde cannot express (e-mail shape and the like).
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Binds a content type to its collection.
pub trait Resource: Serialize + DeserializeOwned + Validate + Send + Sync + 'static {
    /// Collection name in the document store.
    const COLLECTION: &'static str;
    /// Prefix of generated ids (`"<prefix>-<digits>"`).
    const ID_PREFIX: &'static str;

    type Patch: Serialize + Validate + Send + Sync;

    /// Order used by list endpoints. Empty means insertion order.
    fn default_sort() -> Vec<SortKey> {
        Vec::new()
    }
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub(crate) fn default_true() -> bool {
    true
}

/// Loose address check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn validate_email(field: &str, value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::new(field, "value is not a valid email address");
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}
