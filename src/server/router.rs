use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        launch::{
            __path_abort_launch, __path_get_launches, __path_schedule_launch, abort_launch,
            get_launches, schedule_launch, LAUNCH_TAG,
        },
        planet::{__path_get_planets, get_planets, PLANET_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Launchboard API", description = "Launch scheduling and history"),
    tags(
        (name = LAUNCH_TAG, description = "Launch history, scheduling and aborts"),
        (name = PLANET_TAG, description = "Destinations available for scheduling"),
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `cors_origin` - Browser origin allowed to call the API; no CORS layer when `None`
///
/// # Returns
/// - `Ok(Router)` - Router ready to serve
/// - `Err(AppError::ConfigErr)` - `cors_origin` is not a valid header value
pub fn router(state: AppState, cors_origin: Option<&str>) -> Result<Router, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_launches, schedule_launch))
        .routes(routes!(abort_launch))
        .routes(routes!(get_planets))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .with_state(state);

    let Some(origin) = cors_origin else {
        return Ok(router);
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: origin.to_string(),
        })?;

    Ok(router.layer(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([CONTENT_TYPE]),
    ))
}
