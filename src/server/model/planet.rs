//! Destination catalog domain model.

use crate::model::planet::PlanetDto;

/// A destination a launch can be scheduled against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    /// Catalog name of the planet, e.g. "Kepler-442 b".
    pub kepler_name: String,
}

impl Planet {
    /// Converts an entity model to a planet domain model at the repository boundary.
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            kepler_name: entity.kepler_name,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            kepler_name: self.kepler_name,
        }
    }
}
