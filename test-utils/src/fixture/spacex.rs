//! Documents shaped like the external launch catalog's query endpoint responses.
//!
//! Only the fields requested by the importer are populated: the rocket is reduced to its
//! name and every payload to its customer list.

use serde_json::{json, Value};

/// Rocket name carried by the catalog's first launch.
pub const SEED_ROCKET: &str = "Falcon 1";

/// Mission name carried by the catalog's first launch.
pub const SEED_MISSION: &str = "FalconSat";

/// Creates a catalog launch document with one payload owned by `"NASA"`.
///
/// # Arguments
/// - `flight_number` - Catalog flight number
/// - `name` - Mission name
///
/// # Returns
/// - `Value` - Launch document as the catalog serializes it
pub fn launch_doc(flight_number: i32, name: &str) -> Value {
    launch_doc_with_payloads(flight_number, name, vec![vec!["NASA"]])
}

/// Creates a catalog launch document with the given payload customer lists.
///
/// Each inner vector becomes one payload's `customers` array.
pub fn launch_doc_with_payloads(flight_number: i32, name: &str, payloads: Vec<Vec<&str>>) -> Value {
    let payloads: Vec<Value> = payloads
        .into_iter()
        .map(|customers| json!({ "customers": customers, "id": format!("payload-{}", flight_number) }))
        .collect();

    json!({
        "flight_number": flight_number,
        "name": name,
        "rocket": { "name": SEED_ROCKET, "id": "5e9d0d95eda69955f709d1eb" },
        "date_local": "2006-03-25T10:30:00+12:00",
        "date_utc": "2006-03-24T22:30:00.000Z",
        "upcoming": false,
        "success": false,
        "payloads": payloads,
    })
}

/// Creates the catalog's first launch, used as the import sentinel.
pub fn seed_doc() -> Value {
    launch_doc(1, SEED_MISSION)
}

/// Wraps launch documents in the paginated envelope returned by the query endpoint.
pub fn query_response(docs: Vec<Value>) -> Value {
    let total = docs.len();
    json!({
        "docs": docs,
        "totalDocs": total,
        "limit": 999,
        "page": 1,
        "totalPages": 1,
        "hasNextPage": false,
    })
}
