use sea_orm_migration::prelude::*;

use super::m20260105_000001_create_planet_table::Planet;

/// Confirmed Kepler planets inside the habitable zone (stellar flux between 0.36 and
/// 1.11 of Earth's, radius under 1.6 Earth radii).
const HABITABLE_PLANETS: [&str; 8] = [
    "Kepler-1652 b",
    "Kepler-1410 b",
    "Kepler-296 A f",
    "Kepler-442 b",
    "Kepler-296 A e",
    "Kepler-62 f",
    "Kepler-1649 b",
    "Kepler-1229 b",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Planet::Table)
            .columns([Planet::KeplerName])
            .on_conflict(OnConflict::column(Planet::KeplerName).do_nothing().to_owned());

        for name in HABITABLE_PLANETS {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Planet::Table)
            .and_where(Expr::col(Planet::KeplerName).is_in(HABITABLE_PLANETS))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
