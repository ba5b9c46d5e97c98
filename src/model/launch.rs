use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDto {
    pub flight_number: i32,
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTime<Utc>,
    pub customers: Vec<String>,
    pub upcoming: bool,
    pub success: Option<bool>,
    /// Only present on the response to a scheduling request; not persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// Scheduling request body.
///
/// Every field is optional at the wire level so that a missing property is reported as a
/// validation error rather than a deserialization failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLaunchDto {
    pub mission: Option<String>,
    pub rocket: Option<String>,
    pub launch_date: Option<String>, // RFC 3339, "YYYY-MM-DD HH:MM" or "YYYY-MM-DD", UTC
    pub destination: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AbortLaunchDto {
    pub ok: bool,
}
