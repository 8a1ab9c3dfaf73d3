//! Rocket (launch vehicle) entity and its write payloads.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::validate::{require_text, require_text_if_present, Validate};

/// A launch vehicle as stored by the backend.
///
/// Dimensions are metric: `height` and `diameter` in meters, `mass` in
/// kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: DbId,
    /// Identifier in the upstream launch-data source, if this record was
    /// ingested rather than entered by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<DbId>,
    pub name: String,
    pub description: String,
    pub height: f64,
    pub diameter: f64,
    pub mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<DbId>,
    /// Denormalized owning-company name, when the backend joins it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Payload for `POST /api/v1/rockets`. No `id` or audit fields -- those are
/// assigned server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRocket {
    pub name: String,
    pub description: String,
    pub height: f64,
    pub diameter: f64,
    pub mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<DbId>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub active: bool,
}

impl Validate for NewRocket {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)?;
        require_text("description", &self.description)
    }
}

/// Partial payload for `PUT /api/v1/rockets/{id}`. `None` fields are omitted
/// from the body and left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RocketPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<DbId>,
    #[serde(
        default,
        rename = "imageUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Validate for RocketPatch {
    fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("name", self.name.as_deref())?;
        require_text_if_present("description", self.description.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
