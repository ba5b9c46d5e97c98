use super::*;

/// Tests upserting a launch that does not exist yet.
///
/// Expected: Ok with launch inserted
#[tokio::test]
async fn inserts_new_launch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LaunchRepository::new(db);
    let launch = repo.upsert(completed_launch(6, "Falcon 9 Test Flight")).await?;

    assert_eq!(launch.flight_number, 6);
    assert_eq!(launch.mission, "Falcon 9 Test Flight");
    assert_eq!(launch.success, Some(true));

    let stored = entity::prelude::Launch::find_by_id(6).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that upserting an existing flight number replaces every field.
///
/// Expected: Ok with a single row holding the new values
#[tokio::test]
async fn replaces_existing_launch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::launch::LaunchFactory::new(db)
        .flight_number(6)
        .mission("Old Mission")
        .upcoming(true)
        .success(None)
        .build()
        .await?;

    let repo = LaunchRepository::new(db);
    let launch = repo.upsert(completed_launch(6, "New Mission")).await?;

    assert_eq!(launch.mission, "New Mission");
    assert_eq!(launch.rocket, "Falcon 9");
    assert!(!launch.upcoming);
    assert_eq!(launch.success, Some(true));
    assert_eq!(launch.customers, vec!["SpaceX".to_string()]);

    let total = entity::prelude::Launch::find().count(db).await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests that upserting identical data twice leaves the store unchanged.
///
/// Expected: Ok with the same record and count after the second upsert
#[tokio::test]
async fn repeated_upsert_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LaunchRepository::new(db);
    let first = repo.upsert(completed_launch(1, "FalconSat")).await?;
    let second = repo.upsert(completed_launch(1, "FalconSat")).await?;

    assert_eq!(first, second);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that a null outcome round-trips through the store.
///
/// Expected: Ok with success None
#[tokio::test]
async fn stores_undetermined_success() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LaunchRepository::new(db);
    let mut param = completed_launch(190, "Starlink 4-36");
    param.upcoming = true;
    param.success = None;
    param.customers = vec![];

    let launch = repo.upsert(param).await?;

    assert_eq!(launch.success, None);
    assert!(launch.customers.is_empty());

    Ok(())
}
