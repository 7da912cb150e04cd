//! HTTP-level integration tests for profile media upload and listing.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get_auth, register_user};
use sqlx::PgPool;
use tower::ServiceExt;

fn uploads_dir() -> std::path::PathBuf {
    tempfile::TempDir::new().unwrap().keep()
}

/// Build a multipart/form-data POST to `/api/v1/profiles/media`.
fn multipart_upload_request(token: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
    const BOUNDARY: &str = "test-boundary-7db2c1a4";

    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(f) => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n")
                    .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/profiles/media")
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_stores_file_and_creates_row(pool: PgPool) {
    let uploads = uploads_dir();
    let app = common::build_test_app(pool, uploads.clone());
    let (user_id, token) = register_user(app.clone(), "snap@example.com").await;

    let request = multipart_upload_request(
        &token,
        &[("file", Some("selfie.png"), b"png-bytes".as_slice())],
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["userId"], user_id.as_str());
    assert_eq!(json["mediaType"], "photo");

    // The stored path is a serving path and the file exists on disk.
    let file_path = json["filePath"].as_str().unwrap();
    let file_name = file_path.strip_prefix("/uploads/").unwrap();
    assert!(file_name.ends_with(".png"));
    assert_eq!(
        std::fs::read(uploads.join(file_name)).unwrap(),
        b"png-bytes"
    );

    // Listing returns the new row.
    let response = get_auth(app, &format!("/api/v1/profiles/{user_id}/media"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["filePath"], file_path);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_accepts_video_media_type_field(pool: PgPool) {
    let app = common::build_test_app(pool, uploads_dir());
    let (_, token) = register_user(app.clone(), "vid@example.com").await;

    let request = multipart_upload_request(
        &token,
        &[
            ("file", Some("clip.mp4"), b"mp4-bytes".as_slice()),
            ("mediaType", None, b"video".as_slice()),
        ],
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["mediaType"], "video");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_rejects_unknown_media_type(pool: PgPool) {
    let app = common::build_test_app(pool, uploads_dir());
    let (_, token) = register_user(app.clone(), "gif@example.com").await;

    let request = multipart_upload_request(
        &token,
        &[
            ("file", Some("anim.gif"), b"gif-bytes".as_slice()),
            ("mediaType", None, b"gif".as_slice()),
        ],
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_without_file_field_is_a_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool, uploads_dir());
    let (_, token) = register_user(app.clone(), "empty@example.com").await;

    let request = multipart_upload_request(&token, &[("mediaType", None, b"photo".as_slice())]);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
