pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_planet_table;
mod m20260105_000002_create_launch_table;
mod m20260106_000003_seed_habitable_planets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_planet_table::Migration),
            Box::new(m20260105_000002_create_launch_table::Migration),
            Box::new(m20260106_000003_seed_habitable_planets::Migration),
        ]
    }
}
