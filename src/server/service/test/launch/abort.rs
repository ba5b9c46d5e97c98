use super::*;

/// Tests aborting a scheduled launch.
///
/// Expected: Ok(true) and the launch is no longer upcoming and marked failed
#[tokio::test]
async fn aborts_existing_launch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::launch::LaunchFactory::new(db)
        .flight_number(101)
        .upcoming(true)
        .success(Some(true))
        .build()
        .await?;

    let service = LaunchService::new(db);
    let aborted = service.abort(101).await?;

    assert!(aborted);
    let launch = LaunchRepository::new(db)
        .find(LaunchFilter::by_flight_number(101))
        .await?
        .unwrap();
    assert!(!launch.upcoming);
    assert_eq!(launch.success, Some(false));

    Ok(())
}

/// Tests aborting the same launch twice.
///
/// Expected: Ok(true) both times
#[tokio::test]
async fn repeated_abort_still_reports_success() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_launch_with_flight_number(db, 101).await?;

    let service = LaunchService::new(db);

    assert!(service.abort(101).await?);
    assert!(service.abort(101).await?);

    Ok(())
}

/// Tests aborting a flight number that is not stored.
///
/// Expected: Ok(false) and other launches unchanged
#[tokio::test]
async fn reports_false_for_unknown_launch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::launch::LaunchFactory::new(db)
        .flight_number(101)
        .upcoming(true)
        .build()
        .await?;

    let service = LaunchService::new(db);
    let aborted = service.abort(999).await?;

    assert!(!aborted);
    assert!(!service.exists_by_flight_number(999).await?);
    let launch = LaunchRepository::new(db)
        .find(LaunchFilter::by_flight_number(101))
        .await?
        .unwrap();
    assert!(launch.upcoming);

    Ok(())
}
