//! Launch base (spaceport) entity and write payloads.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::validate::{
    require_text, require_text_if_present, validate_latitude, validate_longitude, Validate,
};

/// A launch site as stored by the backend. The coordinate pair is required
/// and only meaningful together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchBase {
    pub id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<DbId>,
    pub name: String,
    pub location: String,
    pub country: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Payload for `POST /api/v1/launch-bases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLaunchBase {
    pub name: String,
    pub location: String,
    pub country: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Validate for NewLaunchBase {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)?;
        require_text("location", &self.location)?;
        require_text("country", &self.country)?;
        validate_latitude(self.latitude)?;
        validate_longitude(self.longitude)
    }
}

/// Partial payload for `PUT /api/v1/launch-bases/{id}`. Latitude and
/// longitude move together or not at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchBasePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        rename = "imageUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Validate for LaunchBasePatch {
    fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("name", self.name.as_deref())?;
        require_text_if_present("location", self.location.as_deref())?;
        require_text_if_present("country", self.country.as_deref())?;
        match (self.latitude, self.longitude) {
            (None, None) => Ok(()),
            (Some(latitude), Some(longitude)) => {
                validate_latitude(latitude)?;
                validate_longitude(longitude)
            }
            _ => Err(CoreError::Validation(
                "latitude and longitude must be updated together".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
