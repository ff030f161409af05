//! HTTP-level tests driving the full router over a real socket.

use std::net::SocketAddr;

use reqwest::{multipart, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::server::{
    router,
    service::media::{ImageHost, MediaStorage, MAX_UPLOAD_BYTES},
    state::AppState,
};

mod media;

/// Running server bound to an ephemeral local port.
///
/// Holds the database context and upload directory so both live as long as the test.
struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    uploads: TempDir,
    _context: TestContext,
}

impl TestServer {
    async fn start() -> Self {
        Self::start_with_image_host(None).await
    }

    async fn start_with_image_host(image_host: Option<ImageHost>) -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();
        let uploads = tempfile::tempdir().unwrap();

        let state = AppState::new(
            db,
            MediaStorage::new(uploads.path().to_path_buf()),
            image_host,
            None,
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(
                listener,
                router::router(state).into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .unwrap();
        });

        Self {
            addr,
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
            uploads,
            _context: context,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    fn stored_files(&self) -> usize {
        std::fs::read_dir(self.uploads.path()).unwrap().count()
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        read_json(response).await
    }

    async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read_json(response).await
    }

    async fn put_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.delete(self.url(path)).send().await.unwrap();
        read_json(response).await
    }

    async fn post_multipart(&self, path: &str, form: multipart::Form) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .unwrap();
        read_json(response).await
    }
}

/// Reads the status and JSON body; an empty body reads as `null`.
async fn read_json(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.bytes().await.unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn image_part(file_name: &str, mime: &str, size: usize) -> multipart::Part {
    multipart::Part::bytes(vec![7u8; size])
        .file_name(file_name.to_string())
        .mime_str(mime)
        .unwrap()
}

/// Tests the liveness banner.
///
/// Expected: 200 with the plain-text banner
#[tokio::test]
async fn index_returns_banner() {
    let server = TestServer::start().await;

    let response = server.client.get(server.url("/")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        "Hello!! CUSAP server is running"
    );
}

/// Tests that the API description is served.
///
/// Expected: 200 with an OpenAPI document listing the form routes
#[tokio::test]
async fn serves_openapi_document() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/api/public/forms/{id}/submit"].is_object());
    assert!(body["paths"]["/upload"].is_object());
}
