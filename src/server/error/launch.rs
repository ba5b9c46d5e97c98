use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum LaunchError {
    /// Scheduling request is missing one of mission, rocket, launch date or destination.
    ///
    /// Raised before any destination lookup or store access. Results in 400 Bad Request.
    #[error("Missing required launch property: {0}")]
    MissingLaunchProperty(&'static str),

    /// Launch date could not be parsed into a UTC instant.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid launch date '{0}'")]
    InvalidLaunchDate(String),

    /// Requested destination is not present in the planet catalog.
    ///
    /// No launch record is created. Results in 400 Bad Request.
    #[error("No matching planet found for destination '{0}'")]
    DestinationNotFound(String),

    /// Store write failed while persisting a newly scheduled launch.
    ///
    /// The launch is not considered created. Results in 500 Internal Server Error
    /// with the underlying database error logged server-side.
    #[error("Failed to persist launch {flight_number}: {source}")]
    PersistFailed {
        flight_number: i32,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Flight number in the request path is not a positive integer.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid launch id '{0}'")]
    InvalidFlightNumber(String),

    /// No launch exists with the requested flight number.
    ///
    /// Results in 404 Not Found.
    #[error("Launch {0} does not exist")]
    LaunchNotFound(i32),

    /// The abort patch matched no record.
    ///
    /// Only reachable if the launch disappears between the existence check and the
    /// update. Results in 400 Bad Request.
    #[error("Failed to abort launch {0}")]
    AbortFailed(i32),
}

/// Converts launch errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, unknown destination, failed abort
/// - 404 Not Found - Abort of a launch that does not exist
/// - 500 Internal Server Error - Persist failures (details logged, generic message returned)
impl IntoResponse for LaunchError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingLaunchProperty(_) => (
                StatusCode::BAD_REQUEST,
                "Missing required launch property".to_string(),
            ),
            Self::InvalidLaunchDate(_) => {
                (StatusCode::BAD_REQUEST, "Invalid Launch Date".to_string())
            }
            Self::PersistFailed { .. } => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to schedule launch".to_string(),
                )
            }
            Self::LaunchNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::DestinationNotFound(_) | Self::InvalidFlightNumber(_) | Self::AbortFailed(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
