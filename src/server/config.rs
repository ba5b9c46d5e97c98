use crate::server::error::{config::ConfigError, AppError};

const SPACEX_API_URL: &str = "https://api.spacexdata.com/v4/launches/query";
const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Query endpoint of the external launch catalog used to seed the launch store.
    pub spacex_api_url: String,

    /// Origin allowed to call the API from a browser, if any.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port,
            spacex_api_url: std::env::var("SPACEX_API_URL")
                .unwrap_or_else(|_| SPACEX_API_URL.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        })
    }
}
