/// Liveness banner.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain")
    ),
)]
pub async fn index() -> &'static str {
    "Hello!! CUSAP server is running"
}
