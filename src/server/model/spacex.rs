//! Request and response shapes of the external launch catalog's query endpoint.
//!
//! The catalog is queried once with a match-all filter and a populate list that reduces
//! every related rocket to its name and every payload to its customer list. Response
//! documents are normalized into `UpsertLaunchParam` before reaching the launch store.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::server::model::launch::UpsertLaunchParam;

/// Body of the catalog query request.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchQuery {
    /// Match-all filter; serializes as `{}`.
    pub query: serde_json::Map<String, serde_json::Value>,
    pub options: LaunchQueryOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct LaunchQueryOptions {
    pub limit: u32,
    pub populate: Vec<PopulateOption>,
}

/// Related-entity expansion restricted to the selected sub-fields.
#[derive(Debug, Clone, Serialize)]
pub struct PopulateOption {
    pub path: &'static str,
    pub select: BTreeMap<&'static str, u8>,
}

impl PopulateOption {
    fn select(path: &'static str, field: &'static str) -> Self {
        Self {
            path,
            select: BTreeMap::from([(field, 1)]),
        }
    }
}

impl LaunchQuery {
    /// Builds a match-all query returning up to `limit` launches with rocket names and
    /// payload customers populated.
    pub fn all_with_customers(limit: u32) -> Self {
        Self {
            query: serde_json::Map::new(),
            options: LaunchQueryOptions {
                limit,
                populate: vec![
                    PopulateOption::select("rocket", "name"),
                    PopulateOption::select("payloads", "customers"),
                ],
            },
        }
    }
}

/// Envelope returned by the query endpoint.
///
/// Documents are kept as raw JSON so a single malformed launch can be skipped without
/// discarding the whole response.
#[derive(Debug, Deserialize)]
pub struct LaunchQueryResponse {
    pub docs: Vec<serde_json::Value>,
}

/// Launch document as returned by the catalog, limited to the fields the importer reads.
#[derive(Debug, Clone, Deserialize)]
pub struct SpacexLaunch {
    pub flight_number: i32,
    pub name: String,
    pub rocket: SpacexRocket,
    pub date_local: DateTime<FixedOffset>,
    pub upcoming: bool,
    pub success: Option<bool>,
    #[serde(default)]
    pub payloads: Vec<SpacexPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpacexRocket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpacexPayload {
    #[serde(default)]
    pub customers: Option<Vec<String>>,
}

impl SpacexLaunch {
    /// Normalizes a catalog document into a launch record.
    ///
    /// Customers are flattened across all payloads in order; payloads without customers
    /// contribute nothing.
    pub fn into_upsert_param(self) -> UpsertLaunchParam {
        let customers = self
            .payloads
            .into_iter()
            .flat_map(|payload| payload.customers.unwrap_or_default())
            .collect();

        UpsertLaunchParam {
            flight_number: self.flight_number,
            mission: self.name,
            rocket: self.rocket.name,
            launch_date: self.date_local.with_timezone(&Utc),
            customers,
            upcoming: self.upcoming,
            success: self.success,
        }
    }
}
