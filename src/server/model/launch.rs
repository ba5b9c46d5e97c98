//! Launch domain models and parameters.
//!
//! Provides the launch record as seen by the service layer, the parameter types used to
//! write it (full upsert, partial patch, scheduling request) and the field filter used for
//! single-record lookups.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::launch::{LaunchDto, ScheduleLaunchDto},
    server::{error::launch::LaunchError, util::parse::parse_launch_date},
};

/// A launch record keyed by flight number.
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    /// Unique flight number.
    pub flight_number: i32,
    /// Mission name.
    pub mission: String,
    /// Launch vehicle name.
    pub rocket: String,
    /// Scheduled or actual launch instant.
    pub launch_date: DateTime<Utc>,
    /// Organizations sponsoring the payloads, in payload order.
    pub customers: Vec<String>,
    /// Whether the launch has yet to happen.
    pub upcoming: bool,
    /// Outcome of the launch; `None` while undetermined.
    pub success: Option<bool>,
}

impl Launch {
    /// Converts an entity model to a launch domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The launch entity from the database
    ///
    /// # Returns
    /// - `Ok(Launch)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored customers column is not a JSON array of strings
    pub fn from_entity(entity: entity::launch::Model) -> Result<Self, DbErr> {
        let customers = serde_json::from_value::<Vec<String>>(entity.customers).map_err(|e| {
            DbErr::Custom(format!(
                "Failed to parse customers of launch {}: {}",
                entity.flight_number, e
            ))
        })?;

        Ok(Self {
            flight_number: entity.flight_number,
            mission: entity.mission,
            rocket: entity.rocket,
            launch_date: entity.launch_date,
            customers,
            upcoming: entity.upcoming,
            success: entity.success,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> LaunchDto {
        LaunchDto {
            flight_number: self.flight_number,
            mission: self.mission,
            rocket: self.rocket,
            launch_date: self.launch_date,
            customers: self.customers,
            upcoming: self.upcoming,
            success: self.success,
            destination: None,
        }
    }
}

/// Full launch record to insert, or to replace the record sharing its flight number.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertLaunchParam {
    pub flight_number: i32,
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTime<Utc>,
    pub customers: Vec<String>,
    pub upcoming: bool,
    pub success: Option<bool>,
}

/// Partial update applied to a single launch.
///
/// Only provided fields are written. `success` uses an outer `Option` for presence and an
/// inner one for the nullable value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateLaunchParams {
    pub upcoming: Option<bool>,
    pub success: Option<Option<bool>>,
}

impl UpdateLaunchParams {
    /// Patch marking a launch as resolved and failed.
    pub fn abort() -> Self {
        Self {
            upcoming: Some(false),
            success: Some(Some(false)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_none() && self.success.is_none()
    }
}

/// Field predicate for single-launch lookups. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchFilter {
    pub flight_number: Option<i32>,
    pub rocket: Option<String>,
    pub mission: Option<String>,
}

impl LaunchFilter {
    pub fn by_flight_number(flight_number: i32) -> Self {
        Self {
            flight_number: Some(flight_number),
            ..Default::default()
        }
    }
}

/// Validated request to schedule a new launch.
///
/// The destination is only resolved against the planet catalog at scheduling time and is
/// not part of the persisted record.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleLaunchParams {
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTime<Utc>,
    pub destination: String,
}

impl ScheduleLaunchParams {
    /// Validates a scheduling request body.
    ///
    /// Presence of every property is checked before the launch date is parsed, so a request
    /// missing its date reports the missing property rather than an invalid date.
    ///
    /// # Returns
    /// - `Ok(ScheduleLaunchParams)` - All properties present and date parsed
    /// - `Err(LaunchError::MissingLaunchProperty)` - A property is absent or blank
    /// - `Err(LaunchError::InvalidLaunchDate)` - The date does not parse
    pub fn from_dto(dto: ScheduleLaunchDto) -> Result<Self, LaunchError> {
        let mission = required(dto.mission, "mission")?;
        let rocket = required(dto.rocket, "rocket")?;
        let launch_date = required(dto.launch_date, "launchDate")?;
        let destination = required(dto.destination, "destination")?;

        Ok(Self {
            mission,
            rocket,
            launch_date: parse_launch_date(&launch_date)?,
            destination,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, LaunchError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(LaunchError::MissingLaunchProperty(name))
}
