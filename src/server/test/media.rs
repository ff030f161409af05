use axum::{extract::Multipart, routing::post, Json, Router};

use super::*;

/// Tests uploading an image and fetching it back from the served directory.
///
/// Expected: 200 with a URL under /uploads/ that serves the same bytes
#[tokio::test]
async fn upload_is_served_back() {
    let server = TestServer::start().await;

    let form = multipart::Form::new().part("file", image_part("cat.png", "image/png", 2048));
    let (status, body) = server.post_multipart("/upload", form).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let image_url = body["imageUrl"].as_str().unwrap();
    let filename = body["filename"].as_str().unwrap();
    assert!(filename.starts_with("file-"));
    assert!(filename.ends_with(".png"));
    assert_eq!(image_url, server.url(&format!("/uploads/{}", filename)));

    let served = server.client.get(image_url).send().await.unwrap();
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(served.bytes().await.unwrap().len(), 2048);
}

/// Tests the accepted field names and the size ceiling.
///
/// Expected: 200 for a `photo` field holding exactly 5 MiB
#[tokio::test]
async fn upload_accepts_photo_field_at_limit() {
    let server = TestServer::start().await;

    let form = multipart::Form::new()
        .part("photo", image_part("big.jpg", "image/jpeg", MAX_UPLOAD_BYTES));
    let (status, body) = server.post_multipart("/upload", form).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["filename"].as_str().unwrap().starts_with("photo-"));
    assert_eq!(server.stored_files(), 1);
}

/// Tests rejected uploads.
///
/// Expected: 400 for a PDF and for a body without a file, nothing stored
#[tokio::test]
async fn upload_rejects_invalid_payloads() {
    let server = TestServer::start().await;

    let pdf = multipart::Form::new().part("file", image_part("doc.pdf", "application/pdf", 64));
    let (status, body) = server.post_multipart("/upload", pdf).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("application/pdf"));

    let no_file = multipart::Form::new().text("title", "nothing attached");
    let (status, _) = server.post_multipart("/upload", no_file).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(server.stored_files(), 0);
}

/// Tests the photo gallery with local storage.
///
/// Expected: 201 on create, listing as a plain array, blob removed on delete
#[tokio::test]
async fn photo_gallery_stores_and_removes_images() {
    let server = TestServer::start().await;

    let form = multipart::Form::new()
        .part("image", image_part("p.png", "image/png", 512))
        .text("title", "Picnic")
        .text("date", "2024-05-01");
    let (status, body) = server.post_multipart("/photos", form).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["title"], json!("Picnic"));
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(server.stored_files(), 1);

    let (_, photos) = server.get("/photos").await;
    assert_eq!(photos.as_array().unwrap().len(), 1);

    let (status, body) = server.delete(&format!("/photos/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Photo deleted successfully"));
    assert_eq!(server.stored_files(), 0);

    let (status, _) = server.delete(&format!("/photos/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests remote photo storage without a configured host.
///
/// Expected: 400 and nothing stored
#[tokio::test]
async fn remote_photo_without_host_is_rejected() {
    let server = TestServer::start().await;

    let form = multipart::Form::new()
        .part("image", image_part("p.png", "image/png", 512))
        .text("storage", "remote");
    let (status, body) = server.post_multipart("/photos", form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Remote image storage is not configured"));
    assert_eq!(server.stored_files(), 0);
}

/// Starts a stand-in image host that checks the API key and echoes a fixed URL.
async fn start_image_host() -> String {
    async fn accept(mut multipart: Multipart) -> Json<Value> {
        let mut key = None;
        let mut image_size = 0;

        while let Some(field) = multipart.next_field().await.unwrap() {
            match field.name() {
                Some("key") => key = Some(field.text().await.unwrap()),
                Some("image") => image_size = field.bytes().await.unwrap().len(),
                _ => {}
            }
        }

        assert_eq!(key.as_deref(), Some("secret"));
        assert_eq!(image_size, 512);

        Json(json!({ "data": { "url": "https://img.example/abc.png" } }))
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, Router::new().route("/upload", post(accept)))
            .await
            .unwrap();
    });

    format!("http://{}/upload", addr)
}

/// Tests remote photo storage through a configured image host.
///
/// Expected: 201 with the host's URL, no local blob, delete leaves storage untouched
#[tokio::test]
async fn remote_photo_uses_image_host() {
    let host_url = start_image_host().await;
    let image_host = ImageHost::new(
        reqwest::Client::builder().no_proxy().build().unwrap(),
        host_url,
        "secret".to_string(),
    );
    let server = TestServer::start_with_image_host(Some(image_host)).await;

    let form = multipart::Form::new()
        .part("photo", image_part("p.png", "image/png", 512))
        .text("storage", "Remote");
    let (status, body) = server.post_multipart("/photos", form).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["url"], json!("https://img.example/abc.png"));
    assert_eq!(server.stored_files(), 0);

    let id = body["data"]["id"].as_i64().unwrap();
    let (status, _) = server.delete(&format!("/photos/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
}
