use super::{validate_email, Resource, Validate};
use crate::domain::error::ValidationError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The site owner. The collection holds exactly one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Photographer {
    pub name: String,
    pub bio: String,
    pub experience: String,
    pub location: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhotographerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Validate for Photographer {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email("email", &self.email)
    }
}

impl Validate for PhotographerPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.email {
            Some(email) => validate_email("email", email),
            None => Ok(()),
        }
    }
}

impl Resource for Photographer {
    const COLLECTION: &'static str = "photographer";
    const ID_PREFIX: &'static str = "photographer";
    type Patch = PhotographerPatch;
}
