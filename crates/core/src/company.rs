//! Aerospace company entity and write payloads.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::validate::{require_text, require_text_if_present, Validate};

/// A launch provider / manufacturer as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<DbId>,
    pub name: String,
    pub description: String,
    /// Founding year.
    pub founded: i32,
    pub founder: String,
    pub headquarters: String,
    pub employees: i32,
    pub website: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Payload for `POST /api/v1/companies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub description: String,
    pub founded: i32,
    pub founder: String,
    pub headquarters: String,
    pub employees: i32,
    pub website: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Validate for NewCompany {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)?;
        require_text("founder", &self.founder)
    }
}

/// Partial payload for `PUT /api/v1/companies/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(
        default,
        rename = "imageUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Validate for CompanyPatch {
    fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("name", self.name.as_deref())?;
        require_text_if_present("founder", self.founder.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
