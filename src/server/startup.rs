use crate::server::{
    config::Config,
    error::AppError,
    service::media::{ImageHost, MediaStorage},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the upload directory if needed and returns storage rooted at it.
///
/// # Returns
/// - `Ok(MediaStorage)` - Storage ready to accept blobs
/// - `Err(AppError::IoErr)` - Directory could not be created
pub async fn setup_media_storage(config: &Config) -> Result<MediaStorage, AppError> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    tracing::info!("Storing uploads in {}", config.upload_dir.display());

    Ok(MediaStorage::new(config.upload_dir.clone()))
}

/// Creates an HTTP client for the remote image host.
///
/// Redirects are disabled so an upload can only ever reach the configured endpoint.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Builds the remote image host client when both its URL and API key are configured.
///
/// # Returns
/// - `Some(ImageHost)` - Remote host is configured
/// - `None` - Either variable is missing; photos are then always stored locally
pub fn setup_image_host(config: &Config, http_client: reqwest::Client) -> Option<ImageHost> {
    match (&config.image_host_url, &config.image_host_api_key) {
        (Some(url), Some(api_key)) => {
            tracing::info!("Remote image host enabled at {}", url);
            Some(ImageHost::new(http_client, url.clone(), api_key.clone()))
        }
        (Some(_), None) | (None, Some(_)) => {
            tracing::warn!(
                "IMAGE_HOST_URL and IMAGE_HOST_API_KEY must both be set; remote image host disabled"
            );
            None
        }
        (None, None) => None,
    }
}
