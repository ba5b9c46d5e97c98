use thiserror::Error;

/// Failures while seeding the launch store from the external catalog.
///
/// All variants are fatal for the current import run. Records upserted before the
/// failure stay in the store; a fresh run re-upserts them idempotently.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Catalog could not be reached or its response body could not be read.
    #[error("Launch data download failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog answered with a non-success status.
    #[error("Launch data download failed with status {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },

    /// Store write failed while merging an imported launch.
    #[error("Failed to store imported launch {flight_number}: {source}")]
    Persist {
        flight_number: i32,
        #[source]
        source: sea_orm::DbErr,
    },
}
