use super::*;

/// Tests importing a catalog into an empty store.
///
/// Expected: Ok with every document imported and normalized
#[tokio::test]
async fn imports_every_catalog_launch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = MockCatalog::with_docs(vec![
        fixture::spacex::seed_doc(),
        fixture::spacex::launch_doc_with_payloads(2, "DemoSat", vec![vec!["DARPA"], vec![]]),
    ])
    .await;
    let client = reqwest::Client::new();

    let summary = LaunchImportService::new(db, &client, &catalog.url)
        .import_all()
        .await?;

    assert_eq!(
        summary,
        ImportSummary {
            fetched: 2,
            imported: 2,
            skipped: 0
        }
    );
    let repo = LaunchRepository::new(db);
    assert_eq!(repo.count().await?, 2);
    let demo = repo.find(LaunchFilter::by_flight_number(2)).await?.unwrap();
    assert_eq!(demo.mission, "DemoSat");
    assert_eq!(demo.rocket, "Falcon 1");
    assert_eq!(demo.customers, vec!["DARPA".to_string()]);

    Ok(())
}

/// Tests the request body sent to the catalog.
///
/// Expected: match-all query with rocket names and payload customers populated
#[tokio::test]
async fn queries_catalog_with_populate_options() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = MockCatalog::with_docs(vec![]).await;
    let client = reqwest::Client::new();

    LaunchImportService::new(db, &client, &catalog.url)
        .import_all()
        .await?;

    let requests = catalog.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["query"], json!({}));
    assert_eq!(requests[0]["options"]["limit"], json!(999));
    assert_eq!(
        requests[0]["options"]["populate"],
        json!([
            { "path": "rocket", "select": { "name": 1 } },
            { "path": "payloads", "select": { "customers": 1 } }
        ])
    );

    Ok(())
}

/// Tests running the same import twice.
///
/// Expected: second run leaves the store identical to the first
#[tokio::test]
async fn repeated_import_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = MockCatalog::with_docs(vec![
        fixture::spacex::seed_doc(),
        fixture::spacex::launch_doc(2, "DemoSat"),
    ])
    .await;
    let client = reqwest::Client::new();
    let service = LaunchImportService::new(db, &client, &catalog.url);
    let repo = LaunchRepository::new(db);

    service.import_all().await?;
    let first = repo.list(0, None).await?;
    service.import_all().await?;
    let second = repo.list(0, None).await?;

    assert_eq!(first, second);
    assert_eq!(catalog.request_count(), 2);

    Ok(())
}

/// Tests that imported data replaces a local record with the same flight number.
///
/// Expected: stored launch matches the catalog document
#[tokio::test]
async fn overwrites_local_launch_with_catalog_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::launch::LaunchFactory::new(db)
        .flight_number(1)
        .mission("Local Edit")
        .upcoming(true)
        .build()
        .await?;
    let catalog = MockCatalog::with_docs(vec![fixture::spacex::seed_doc()]).await;
    let client = reqwest::Client::new();

    LaunchImportService::new(db, &client, &catalog.url)
        .import_all()
        .await?;

    let launch = LaunchRepository::new(db)
        .find(LaunchFilter::by_flight_number(1))
        .await?
        .unwrap();
    assert_eq!(launch.mission, "FalconSat");
    assert!(!launch.upcoming);
    assert_eq!(launch.success, Some(false));

    Ok(())
}

/// Tests a catalog response containing a malformed document.
///
/// Expected: Ok with the malformed document skipped and the rest imported
#[tokio::test]
async fn skips_malformed_documents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mut unpopulated = fixture::spacex::launch_doc(3, "Trailblazer");
    unpopulated["rocket"] = json!("5e9d0d95eda69955f709d1eb");
    let catalog = MockCatalog::with_docs(vec![
        fixture::spacex::seed_doc(),
        unpopulated,
        fixture::spacex::launch_doc(4, "RatSat"),
    ])
    .await;
    let client = reqwest::Client::new();

    let summary = LaunchImportService::new(db, &client, &catalog.url)
        .import_all()
        .await?;

    assert_eq!(
        summary,
        ImportSummary {
            fetched: 3,
            imported: 2,
            skipped: 1
        }
    );
    let repo = LaunchRepository::new(db);
    assert!(!repo.exists_by_flight_number(3).await?);
    assert!(repo.exists_by_flight_number(4).await?);

    Ok(())
}

/// Tests a catalog answering with a server error.
///
/// Expected: Err(UnexpectedStatus) and previously stored launches untouched
#[tokio::test]
async fn fails_on_error_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_launch_with_flight_number(db, 101).await?;
    let catalog = MockCatalog::serve(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "unavailable" }),
    )
    .await;
    let client = reqwest::Client::new();

    let result = LaunchImportService::new(db, &client, &catalog.url)
        .import_all()
        .await;

    assert!(matches!(
        result,
        Err(ImportError::UnexpectedStatus { status }) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    let repo = LaunchRepository::new(db);
    assert_eq!(repo.count().await?, 1);
    assert!(repo.exists_by_flight_number(101).await?);

    Ok(())
}

/// Tests an unreachable catalog.
///
/// Expected: Err(ImportError::Request)
#[tokio::test]
async fn fails_when_catalog_unreachable() {
    let test = TestBuilder::new().with_launch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/v4/launches/query", listener.local_addr().unwrap());
    drop(listener);
    let client = reqwest::Client::new();

    let result = LaunchImportService::new(db, &client, &url).import_all().await;

    assert!(matches!(result, Err(ImportError::Request(_))));
}

/// Tests a store failure in the middle of an import.
///
/// Expected: Err(ImportError::Persist) naming the failed flight number
#[tokio::test]
async fn fails_when_store_rejects_write() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = MockCatalog::with_docs(vec![fixture::spacex::seed_doc()]).await;
    let client = reqwest::Client::new();

    let result = LaunchImportService::new(db, &client, &catalog.url)
        .import_all()
        .await;

    assert!(matches!(
        result,
        Err(ImportError::Persist {
            flight_number: 1,
            ..
        })
    ));
}
