use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::planet::Planet;

/// Read-only access to the destination catalog.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a planet by its catalog name
    ///
    /// # Returns
    /// - `Ok(Some(Planet))`: Planet found in the catalog
    /// - `Ok(None)`: No planet with that name
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_kepler_name(&self, kepler_name: &str) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(kepler_name.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Planet::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::KeplerName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }
}
