use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{error::AppError, service::planet::PlanetService, state::AppState},
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Get every destination launches can be scheduled against.
///
/// # Returns
/// - `200 OK` - Planets sorted by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);

    let planets = service.get_all().await?;

    Ok(Json(
        planets
            .into_iter()
            .map(|planet| planet.into_dto())
            .collect::<Vec<PlanetDto>>(),
    ))
}
