use super::{timestamp, validate_email, Resource, Validate};
use crate::domain::error::ValidationError;
use crate::storage::{Filter, SortKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }
}

/// A message sent through the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    /// Category the visitor is asking about. Soft reference.
    #[serde(default)]
    pub category: Option<String>,
    pub message: String,
    /// Preferred session date, if the visitor gave one.
    #[serde(default, with = "timestamp::option")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ContactStatus,
}

/// Only the processing status of a message can change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
}

impl Validate for Contact {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email("email", &self.email)
    }
}

impl Validate for ContactPatch {}

impl Resource for Contact {
    const COLLECTION: &'static str = "contacts";
    const ID_PREFIX: &'static str = "contact";
    type Patch = ContactPatch;

    fn default_sort() -> Vec<SortKey> {
        vec![SortKey::desc("created_at")]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
}

impl From<ContactFilter> for Filter {
    fn from(f: ContactFilter) -> Self {
        Filter::new().eq_opt("status", f.status.map(|s| s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_defaults_to_new_and_rejects_unknown_values() {
        let contact: Contact = serde_json::from_value(json!({
            "name": "Marie",
            "email": "marie@example.com",
            "subject": "Mariage",
            "message": "Bonjour"
        }))
        .unwrap();
        assert_eq!(contact.status, ContactStatus::New);
        assert!(contact.validate().is_ok());

        let bad = serde_json::from_value::<Contact>(json!({
            "name": "Marie",
            "email": "marie@example.com",
            "subject": "Mariage",
            "message": "Bonjour",
            "status": "archived"
        }));
        assert!(bad.is_err());
    }
}
