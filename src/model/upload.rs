use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResultDto {
    pub success: bool,
    pub image_url: String,
    pub filename: String,
}

/// Multipart body of `POST /upload`, documented for OpenAPI only.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// Image file; the field may also be named `photo`.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
