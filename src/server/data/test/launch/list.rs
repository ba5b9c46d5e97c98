use super::*;

/// Tests that launches are listed in ascending flight number order.
///
/// Launches are inserted out of order to verify sorting is done by the query.
///
/// Expected: Ok with flight numbers sorted ascending
#[tokio::test]
async fn lists_launches_by_ascending_flight_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_launches(db, &[5, 2, 9, 1]).await?;

    let repo = LaunchRepository::new(db);
    let launches = repo.list(0, None).await?;

    let flight_numbers: Vec<i32> = launches.iter().map(|l| l.flight_number).collect();
    assert_eq!(flight_numbers, vec![1, 2, 5, 9]);

    Ok(())
}

/// Tests skip and limit applied together.
///
/// Expected: Ok with at most `limit` launches after the first `skip`
#[tokio::test]
async fn applies_skip_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_launches(db, &[1, 2, 3, 4, 5]).await?;

    let repo = LaunchRepository::new(db);

    let page = repo.list(1, Some(2)).await?;
    let flight_numbers: Vec<i32> = page.iter().map(|l| l.flight_number).collect();
    assert_eq!(flight_numbers, vec![2, 3]);

    let tail = repo.list(4, Some(10)).await?;
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].flight_number, 5);

    let unbounded = repo.list(2, None).await?;
    assert_eq!(unbounded.len(), 3);

    Ok(())
}

/// Tests skipping past the end of the store.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_skip_exceeds_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_launches(db, &[1, 2]).await?;

    let repo = LaunchRepository::new(db);
    let launches = repo.list(5, Some(10)).await?;

    assert!(launches.is_empty());
    assert_eq!(repo.count().await?, 2);

    Ok(())
}
