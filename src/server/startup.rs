use dioxus_logger::tracing;

use crate::server::{
    config::Config, error::AppError, service::import::LaunchImportService, state::AppState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations. Migrations create the launch and
/// planet tables and seed the planet catalog, so the store is usable as soon as this returns.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for the launch catalog.
///
/// Redirects are disabled so the configured catalog URL is the only host contacted.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(crate::server::error::import::ImportError::from)?;

    Ok(client)
}

/// Seeds the launch store from the external catalog unless it was already seeded.
///
/// A failure here is fatal: the server is not started without launch history.
pub async fn load_launches(state: &AppState) -> Result<(), AppError> {
    let service = LaunchImportService::new(&state.db, &state.http_client, &state.spacex_api_url);

    if let Some(summary) = service.load_all_if_needed().await? {
        tracing::info!(
            "Seeded launch store with {} launches ({} skipped)",
            summary.imported,
            summary.skipped
        );
    }

    Ok(())
}
