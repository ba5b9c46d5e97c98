use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        launch::{AbortLaunchDto, LaunchDto, ScheduleLaunchDto},
    },
    server::{
        error::{launch::LaunchError, AppError},
        model::launch::ScheduleLaunchParams,
        service::launch::LaunchService,
        state::AppState,
    },
};

/// Tag for grouping launch endpoints in OpenAPI documentation
pub static LAUNCH_TAG: &str = "launch";

#[derive(Deserialize)]
pub struct LaunchPaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    /// `0` returns every launch.
    #[serde(default)]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

impl LaunchPaginationParams {
    /// Converts the 1-based page and limit into `(skip, limit)` for the service layer.
    fn into_window(self) -> (u64, Option<u64>) {
        if self.limit == 0 {
            return (0, None);
        }

        let skip = self.page.saturating_sub(1).saturating_mul(self.limit);

        (skip, Some(self.limit))
    }
}

/// Get launches ordered by flight number.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and limit)
///
/// # Returns
/// - `200 OK` - Launches in the requested page
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/launches",
    tag = LAUNCH_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Launches per page, 0 for all (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved launches", body = Vec<LaunchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_launches(
    State(state): State<AppState>,
    Query(params): Query<LaunchPaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = LaunchService::new(&state.db);

    let (skip, limit) = params.into_window();
    let launches = service.list(skip, limit).await?;

    Ok(Json(
        launches
            .into_iter()
            .map(|launch| launch.into_dto())
            .collect::<Vec<LaunchDto>>(),
    ))
}

/// Schedule a new launch.
///
/// Validates the request, checks the destination against the planet catalog and stores
/// the launch under the next flight number. The response echoes the destination, which
/// is not persisted.
///
/// # Returns
/// - `201 Created` - Launch scheduled
/// - `400 Bad Request` - Missing property, invalid launch date or unknown destination
/// - `500 Internal Server Error` - Launch could not be stored
#[utoipa::path(
    post,
    path = "/v1/launches",
    tag = LAUNCH_TAG,
    request_body = ScheduleLaunchDto,
    responses(
        (status = 201, description = "Successfully scheduled launch", body = LaunchDto),
        (status = 400, description = "Invalid launch data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn schedule_launch(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleLaunchDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LaunchService::new(&state.db);

    let params = ScheduleLaunchParams::from_dto(payload)?;
    let destination = params.destination.clone();

    let launch = service.schedule(params).await?;

    let mut dto = launch.into_dto();
    dto.destination = Some(destination);

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Abort a launch.
///
/// Marks the launch as no longer upcoming and failed. Aborting an already aborted launch
/// succeeds again.
///
/// # Returns
/// - `200 OK` - Launch aborted
/// - `400 Bad Request` - Flight number is not a positive integer, or the abort matched nothing
/// - `404 Not Found` - No launch with that flight number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/v1/launches/{id}",
    tag = LAUNCH_TAG,
    params(
        ("id" = i32, Path, description = "Flight number of the launch to abort")
    ),
    responses(
        (status = 200, description = "Successfully aborted launch", body = AbortLaunchDto),
        (status = 400, description = "Invalid flight number or abort failed", body = ErrorDto),
        (status = 404, description = "Launch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn abort_launch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let flight_number = parse_flight_number(&id)?;

    let service = LaunchService::new(&state.db);

    if !service.exists_by_flight_number(flight_number).await? {
        return Err(LaunchError::LaunchNotFound(flight_number).into());
    }

    if !service.abort(flight_number).await? {
        return Err(LaunchError::AbortFailed(flight_number).into());
    }

    Ok(Json(AbortLaunchDto { ok: true }))
}

fn parse_flight_number(id: &str) -> Result<i32, LaunchError> {
    id.trim()
        .parse::<i32>()
        .ok()
        .filter(|flight_number| *flight_number > 0)
        .ok_or_else(|| LaunchError::InvalidFlightNumber(id.to_string()))
}
