use crate::server::data::planet::PlanetRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests looking up a planet by catalog name.
///
/// Expected: Ok(Some) for a known planet, Ok(None) otherwise
#[tokio::test]
async fn finds_planet_by_kepler_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::planet::create_planet(db, "Kepler-442 b").await?;

    let repo = PlanetRepository::new(db);

    let found = repo.find_by_kepler_name("Kepler-442 b").await?;
    assert_eq!(found.map(|p| p.kepler_name), Some("Kepler-442 b".to_string()));
    assert!(repo.find_by_kepler_name("Sun").await?.is_none());

    Ok(())
}

/// Tests listing the catalog.
///
/// Expected: Ok with planets sorted by name
#[tokio::test]
async fn lists_planets_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::planet::create_planet(db, "Kepler-62 f").await?;
    factory::planet::create_planet(db, "Kepler-1652 b").await?;

    let repo = PlanetRepository::new(db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.kepler_name)
        .collect();

    assert_eq!(names, vec!["Kepler-1652 b".to_string(), "Kepler-62 f".to_string()]);

    Ok(())
}
