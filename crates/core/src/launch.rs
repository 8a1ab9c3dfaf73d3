//! Rocket-launch entity, its referenced sub-entities, and write payloads.
//!
//! Launch records are mostly ingested from an upstream data source via the
//! bulk sync endpoint, so they carry considerably more metadata than the
//! hand-entered entities: provider / vehicle / pad references, mission and
//! tag lists, launch-window timestamps, and a weather snapshot.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};
use crate::validate::{require_text, require_text_if_present, Validate};

/// Outcome classification of a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStatus {
    Scheduled,
    Successful,
    Failed,
    Cancelled,
}

/// All valid launch status strings.
const VALID_STATUS_STRINGS: &[&str] = &["scheduled", "successful", "failed", "cancelled"];

impl LaunchStatus {
    /// Return the status as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a status from a string slice.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "successful" => Ok(Self::Successful),
            "failed" => Ok(Self::Failed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(CoreError::Validation(format!(
                "Invalid launch status '{s}'. Must be one of: {}",
                VALID_STATUS_STRINGS.join(", ")
            ))),
        }
    }
}

/// Launch service provider (e.g. SpaceX, Rocket Lab).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchProvider {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// Vehicle flown on a launch, as reported by the upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchVehicle {
    pub id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<DbId>,
    pub slug: String,
}

/// Geographic region a launch pad belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadLocation {
    pub id: DbId,
    pub name: String,
    pub state: String,
    pub statename: String,
    pub country: String,
    pub slug: String,
}

/// Launch pad, optionally with its location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchPad {
    pub id: DbId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<PadLocation>,
}

/// Mission flown on a launch. A single launch can carry several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchMission {
    pub id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<DbId>,
    pub name: String,
    pub description: String,
}

/// Free-form tag attached to a launch by the upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchTag {
    pub id: DbId,
    pub text: String,
}

/// A rocket launch as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<DbId>,
    /// COSPAR international designator, empty until assigned post-launch.
    pub cospar_id: String,
    pub name: String,
    pub slug: String,
    pub launch_date: Timestamp,
    /// Timestamp the upstream source orders launches by; usually equals
    /// `launch_date` but diverges for TBD windows.
    pub sort_date: Timestamp,
    /// Human-readable date as displayed by the upstream source.
    pub date_str: String,
    /// Launch window open / T-0 / close, when the window is published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_open: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t0: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_close: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<LaunchProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<LaunchVehicle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad: Option<LaunchPad>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_base_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missions: Option<Vec<LaunchMission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub mission_description: String,
    pub launch_description: String,
    pub quicktext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<LaunchTag>>,
    pub weather_summary: String,
    pub weather_condition: String,
    pub weather_icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_wind_mph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_updated: Option<Timestamp>,
    pub suborbital: bool,
    pub status: LaunchStatus,
    /// Last-modified timestamp reported by the upstream source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Payload for `POST /api/v1/rocket-launches`. Covers the hand-entered
/// subset; ingested records arrive through the sync endpoint instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLaunch {
    pub name: String,
    pub launch_date: Timestamp,
    pub status: LaunchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cospar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_base_id: Option<DbId>,
    #[serde(default)]
    pub suborbital: bool,
}

impl Validate for NewLaunch {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)
    }
}

/// Partial payload for `PUT /api/v1/rocket-launches/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LaunchStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rocket_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_base_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suborbital: Option<bool>,
}

impl Validate for LaunchPatch {
    fn validate(&self) -> Result<(), CoreError> {
        require_text_if_present("name", self.name.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
