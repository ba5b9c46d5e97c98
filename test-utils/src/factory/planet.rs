//! Planet factory for creating destination catalog entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a planet into the destination catalog.
///
/// # Arguments
/// - `db` - Database connection
/// - `kepler_name` - Catalog name of the planet (e.g. `"Kepler-442 b"`)
///
/// # Returns
/// - `Ok(entity::planet::Model)` - Created planet entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_planet(
    db: &DatabaseConnection,
    kepler_name: &str,
) -> Result<entity::planet::Model, DbErr> {
    entity::planet::ActiveModel {
        kepler_name: ActiveValue::Set(kepler_name.to_string()),
    }
    .insert(db)
    .await
}
