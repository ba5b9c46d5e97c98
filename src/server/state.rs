//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds the database connection pool used by every
//! controller, plus the HTTP client and catalog endpoint used to seed the launch store.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests.
    ///
    /// Configured without redirects; only used to query the launch catalog.
    pub http_client: reqwest::Client,

    /// Query endpoint of the external launch catalog.
    pub spacex_api_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `spacex_api_url` - Query endpoint of the external launch catalog
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, spacex_api_url: String) -> Self {
        Self {
            db,
            http_client,
            spacex_api_url,
        }
    }
}
