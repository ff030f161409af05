use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDto {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Multipart body of `POST /photos`, documented for OpenAPI only.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct PhotoUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`; defaults to now.
    pub date: Option<String>,
    /// `remote` sends the image to the configured image host.
    pub storage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`; defaults to now.
    #[serde(default)]
    pub date: Option<String>,
}
