use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub upload_dir: PathBuf,
    /// Public base URL used when building image links; derived from the `Host` header when unset.
    pub app_url: Option<String>,

    pub image_host_url: Option<String>,
    pub image_host_api_key: Option<String>,
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
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            app_url: optional_var("APP_URL").map(|url| url.trim_end_matches('/').to_string()),
            image_host_url: optional_var("IMAGE_HOST_URL"),
            image_host_api_key: optional_var("IMAGE_HOST_API_KEY"),
        })
    }
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
