use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i32,
    pub name: String,
    pub photo: Option<String>,
    pub blood: Option<String>,
    pub union: Option<String>,
    pub student_id: Option<String>,
    pub department: Option<String>,
    pub session: Option<String>,
    pub mobile: Option<String>,
}

/// Body of both member creation and full member update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberInputDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub blood: Option<String>,
    #[serde(default)]
    pub union: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
}
