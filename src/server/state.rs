//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Local media storage for uploaded images
//! - Optional remote image host client
//! - Optional public base URL for generating image links

use sea_orm::DatabaseConnection;

use crate::server::service::media::{ImageHost, MediaStorage};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `MediaStorage` holds an `Arc` to the upload directory path
/// - `ImageHost` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Local blob storage backing `/upload`, member photos, news images and gallery photos.
    pub media: MediaStorage,

    /// Remote image host, present only when both its URL and API key are configured.
    pub image_host: Option<ImageHost>,

    /// Application base URL for generating image links.
    ///
    /// When `None`, links are built from the `Host` header of the upload request.
    pub app_url: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `media` - Local media storage
    /// - `image_host` - Optional remote image host
    /// - `app_url` - Optional application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        media: MediaStorage,
        image_host: Option<ImageHost>,
        app_url: Option<String>,
    ) -> Self {
        Self {
            db,
            media,
            image_host,
            app_url,
        }
    }
}
