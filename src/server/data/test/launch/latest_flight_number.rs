use super::*;

/// Tests the default flight number of an empty store.
///
/// Expected: Ok(DEFAULT_FLIGHT_NUMBER)
#[tokio::test]
async fn returns_default_for_empty_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LaunchRepository::new(db);

    assert_eq!(repo.latest_flight_number().await?, DEFAULT_FLIGHT_NUMBER);
    assert_eq!(DEFAULT_FLIGHT_NUMBER, 100);

    Ok(())
}

/// Tests that the highest flight number is returned regardless of insertion order.
///
/// Expected: Ok with the maximum flight number
#[tokio::test]
async fn returns_highest_flight_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_launches(db, &[3, 187, 42]).await?;

    let repo = LaunchRepository::new(db);

    assert_eq!(repo.latest_flight_number().await?, 187);

    Ok(())
}

/// Tests that a store below the default still reports its own maximum.
///
/// Expected: Ok with the stored maximum, not the default
#[tokio::test]
async fn returns_stored_maximum_below_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::launch::create_launch_with_flight_number(db, 12).await?;

    let repo = LaunchRepository::new(db);

    assert_eq!(repo.latest_flight_number().await?, 12);

    Ok(())
}
