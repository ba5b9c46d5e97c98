//! Launch lifecycle service.
//!
//! Lists, schedules and aborts launches. Scheduling validates the destination against the
//! planet catalog, then assigns the next flight number as the current maximum plus one.
//! That read-then-write is not atomic: two concurrent schedules can compute the same flight
//! number, in which case the later upsert replaces the earlier launch.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{launch::LaunchRepository, planet::PlanetRepository},
    error::{launch::LaunchError, AppError},
    model::launch::{Launch, ScheduleLaunchParams, UpdateLaunchParams, UpsertLaunchParam},
};

/// Customers attached to every launch scheduled through the API.
pub const DEFAULT_CUSTOMERS: [&str; 2] = ["Zero to Mastery", "NASA"];

pub struct LaunchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LaunchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets launches ordered by flight number
    ///
    /// Pagination values are used as given; sanitizing them is the caller's job.
    ///
    /// # Arguments
    /// - `skip`: Number of launches to drop from the front
    /// - `limit`: Maximum number of launches to return, `None` for all
    pub async fn list(&self, skip: u64, limit: Option<u64>) -> Result<Vec<Launch>, AppError> {
        let repo = LaunchRepository::new(self.db);

        Ok(repo.list(skip, limit).await?)
    }

    /// Schedules a new launch towards a catalog destination.
    ///
    /// The destination is only validated, not stored. The new launch is upcoming, assumed
    /// successful and carries the default customers.
    ///
    /// # Arguments
    /// - `params`: Validated scheduling request
    ///
    /// # Returns
    /// - `Ok(Launch)`: The stored launch with its assigned flight number
    /// - `Err(AppError::LaunchErr(DestinationNotFound))`: Destination not in the catalog
    /// - `Err(AppError::LaunchErr(PersistFailed))`: Store write failed, nothing was created
    /// - `Err(AppError::DbErr)`: Destination lookup or flight number query failed
    pub async fn schedule(&self, params: ScheduleLaunchParams) -> Result<Launch, AppError> {
        let planet_repo = PlanetRepository::new(self.db);
        let launch_repo = LaunchRepository::new(self.db);

        if planet_repo
            .find_by_kepler_name(&params.destination)
            .await?
            .is_none()
        {
            return Err(LaunchError::DestinationNotFound(params.destination).into());
        }

        let flight_number = launch_repo.latest_flight_number().await? + 1;

        let launch = launch_repo
            .upsert(UpsertLaunchParam {
                flight_number,
                mission: params.mission,
                rocket: params.rocket,
                launch_date: params.launch_date,
                customers: DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
                upcoming: true,
                success: Some(true),
            })
            .await
            .map_err(|source| LaunchError::PersistFailed {
                flight_number,
                source,
            })?;

        tracing::info!(
            "Scheduled launch {} ({}) to {}",
            launch.flight_number,
            launch.mission,
            params.destination
        );

        Ok(launch)
    }

    pub async fn exists_by_flight_number(&self, flight_number: i32) -> Result<bool, AppError> {
        let repo = LaunchRepository::new(self.db);

        Ok(repo.exists_by_flight_number(flight_number).await?)
    }

    /// Aborts a launch, marking it as no longer upcoming and failed.
    ///
    /// Aborting an already aborted launch still matches its record and reports success.
    ///
    /// # Returns
    /// - `Ok(true)`: Exactly one launch matched the abort
    /// - `Ok(false)`: No launch with that flight number
    /// - `Err(AppError::DbErr)`: Database error during update
    pub async fn abort(&self, flight_number: i32) -> Result<bool, AppError> {
        let repo = LaunchRepository::new(self.db);

        let updated = repo
            .update_by_flight_number(flight_number, UpdateLaunchParams::abort())
            .await?;

        if updated == 1 {
            tracing::info!("Aborted launch {}", flight_number);
        }

        Ok(updated == 1)
    }
}
