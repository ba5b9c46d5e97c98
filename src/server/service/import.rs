//! Import of launch history from the external launch catalog.
//!
//! The catalog is queried once for all launches (up to a fixed cap) and every document is
//! merged into the launch store by flight number. Upserts are independent, so a failed run
//! leaves earlier records in place and a later run converges to the same state.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::launch::LaunchRepository,
    error::{import::ImportError, AppError},
    model::{
        launch::LaunchFilter,
        spacex::{LaunchQuery, LaunchQueryResponse, SpacexLaunch},
    },
};

/// Maximum number of launches requested from the catalog in a single query.
const IMPORT_LIMIT: u32 = 999;

/// Flight number of the catalog's first launch, used to detect a completed import.
pub const SEED_FLIGHT_NUMBER: i32 = 1;
pub const SEED_ROCKET: &str = "Falcon 1";
pub const SEED_MISSION: &str = "FalconSat";

/// Outcome of a single import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Documents returned by the catalog.
    pub fetched: usize,
    /// Documents normalized and upserted into the store.
    pub imported: usize,
    /// Documents that could not be normalized.
    pub skipped: usize,
}

pub struct LaunchImportService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    api_url: &'a str,
}

impl<'a> LaunchImportService<'a> {
    /// Creates a new LaunchImportService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - HTTP client used for the catalog query
    /// - `api_url` - Query endpoint of the launch catalog
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        api_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            api_url,
        }
    }

    /// Imports the catalog unless the seed launch is already stored.
    ///
    /// # Returns
    /// - `Ok(Some(ImportSummary))` - Import ran
    /// - `Ok(None)` - Seed launch found, import skipped
    /// - `Err(AppError)` - Seed probe or import failed
    pub async fn load_all_if_needed(&self) -> Result<Option<ImportSummary>, AppError> {
        if self.is_already_loaded().await? {
            tracing::info!("Launch data already loaded");
            return Ok(None);
        }

        Ok(Some(self.import_all().await?))
    }

    /// Checks for the seed launch (flight 1, "Falcon 1", "FalconSat").
    ///
    /// This is a sentinel probe, not a diff against the catalog.
    pub async fn is_already_loaded(&self) -> Result<bool, DbErr> {
        let repo = LaunchRepository::new(self.db);

        let seed = repo
            .find(LaunchFilter {
                flight_number: Some(SEED_FLIGHT_NUMBER),
                rocket: Some(SEED_ROCKET.to_string()),
                mission: Some(SEED_MISSION.to_string()),
            })
            .await?;

        Ok(seed.is_some())
    }

    /// Downloads every launch from the catalog and upserts it by flight number.
    ///
    /// Documents that cannot be normalized are skipped with a warning. A failed download or
    /// store write aborts the run; launches upserted before the failure remain stored.
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Counts of fetched, imported and skipped documents
    /// - `Err(ImportError::Request)` - Catalog unreachable or response unreadable
    /// - `Err(ImportError::UnexpectedStatus)` - Catalog answered with a non-success status
    /// - `Err(ImportError::Persist)` - Store write failed
    pub async fn import_all(&self) -> Result<ImportSummary, ImportError> {
        tracing::info!("Downloading launch data from {}", self.api_url);

        let docs = self.fetch_launch_docs().await?;

        self.merge(docs).await
    }

    async fn fetch_launch_docs(&self) -> Result<Vec<serde_json::Value>, ImportError> {
        let response = self
            .http_client
            .post(self.api_url)
            .json(&LaunchQuery::all_with_customers(IMPORT_LIMIT))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Problem downloading launch data: {}", status);
            return Err(ImportError::UnexpectedStatus { status });
        }

        let body: LaunchQueryResponse = response.json().await?;

        Ok(body.docs)
    }

    async fn merge(&self, docs: Vec<serde_json::Value>) -> Result<ImportSummary, ImportError> {
        let repo = LaunchRepository::new(self.db);
        let mut summary = ImportSummary {
            fetched: docs.len(),
            ..Default::default()
        };

        for doc in docs {
            let launch = match serde_json::from_value::<SpacexLaunch>(doc) {
                Ok(launch) => launch.into_upsert_param(),
                Err(e) => {
                    tracing::warn!("Skipping malformed launch document: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let flight_number = launch.flight_number;
            tracing::debug!("{} {}", flight_number, launch.mission);

            repo.upsert(launch)
                .await
                .map_err(|source| ImportError::Persist {
                    flight_number,
                    source,
                })?;
            summary.imported += 1;
        }

        tracing::info!(
            "Imported {} of {} launches ({} skipped)",
            summary.imported,
            summary.fetched,
            summary.skipped
        );

        Ok(summary)
    }
}
