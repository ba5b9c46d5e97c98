//! Launch fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::launch;
use sea_orm::prelude::Json;

/// Default test flight number.
pub const DEFAULT_FLIGHT_NUMBER: i32 = 1;

/// Default test mission name.
pub const DEFAULT_MISSION: &str = "Kepler Exploration X";

/// Default test rocket name.
pub const DEFAULT_ROCKET: &str = "Explorer IS1";

/// Default customers attached to a test launch.
pub const DEFAULT_CUSTOMERS: [&str; 2] = ["Zero to Mastery", "NASA"];

/// Default launch date for test launches (2030-12-27 00:00 UTC).
pub fn default_launch_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 12, 27, 0, 0, 0).unwrap()
}

/// Creates a launch entity model with default values.
///
/// # Default Values
/// - flight_number: `1`
/// - mission: `"Kepler Exploration X"`
/// - rocket: `"Explorer IS1"`
/// - launch_date: 2030-12-27 00:00 UTC
/// - customers: `["Zero to Mastery", "NASA"]`
/// - upcoming: `true`
/// - success: `Some(true)`
pub fn entity() -> launch::Model {
    entity_builder().build()
}

/// Creates a launch entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let launch = fixture::launch::entity_builder()
///     .flight_number(42)
///     .success(None)
///     .build();
/// ```
pub fn entity_builder() -> LaunchEntityBuilder {
    LaunchEntityBuilder::default()
}

/// Builder for creating customized launch entity models.
pub struct LaunchEntityBuilder {
    flight_number: i32,
    mission: String,
    rocket: String,
    launch_date: DateTime<Utc>,
    customers: Vec<String>,
    upcoming: bool,
    success: Option<bool>,
}

impl Default for LaunchEntityBuilder {
    fn default() -> Self {
        Self {
            flight_number: DEFAULT_FLIGHT_NUMBER,
            mission: DEFAULT_MISSION.to_string(),
            rocket: DEFAULT_ROCKET.to_string(),
            launch_date: default_launch_date(),
            customers: DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
            upcoming: true,
            success: Some(true),
        }
    }
}

impl LaunchEntityBuilder {
    pub fn flight_number(mut self, flight_number: i32) -> Self {
        self.flight_number = flight_number;
        self
    }

    pub fn mission(mut self, mission: impl Into<String>) -> Self {
        self.mission = mission.into();
        self
    }

    pub fn rocket(mut self, rocket: impl Into<String>) -> Self {
        self.rocket = rocket.into();
        self
    }

    pub fn launch_date(mut self, launch_date: DateTime<Utc>) -> Self {
        self.launch_date = launch_date;
        self
    }

    pub fn customers(mut self, customers: Vec<String>) -> Self {
        self.customers = customers;
        self
    }

    pub fn upcoming(mut self, upcoming: bool) -> Self {
        self.upcoming = upcoming;
        self
    }

    pub fn success(mut self, success: Option<bool>) -> Self {
        self.success = success;
        self
    }

    /// Builds the launch entity model.
    pub fn build(self) -> launch::Model {
        launch::Model {
            flight_number: self.flight_number,
            mission: self.mission,
            rocket: self.rocket,
            launch_date: self.launch_date,
            customers: Json::from(self.customers),
            upcoming: self.upcoming,
            success: self.success,
        }
    }
}
