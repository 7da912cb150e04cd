//! Artifact download tests against a local HTTP server.

use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use uuid::Uuid;

use tamagochi_pipeline::artifact::fetch_and_store;
use tamagochi_pipeline::PipelineError;

async fn spawn_host() -> SocketAddr {
    let app = Router::new()
        .route("/face.webp", get(|| async { b"artifact-bytes".to_vec() }))
        .route("/no-extension", get(|| async { b"raw".to_vec() }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn stores_artifact_and_returns_serving_path() {
    let addr = spawn_host().await;
    let uploads = tempfile::tempdir().unwrap();
    let child_id = Uuid::new_v4();
    let client = reqwest::Client::new();

    let path = fetch_and_store(
        &client,
        &format!("http://{addr}/face.webp?token=abc"),
        child_id,
        uploads.path(),
    )
    .await
    .unwrap();

    // Query string stripped, extension preserved.
    assert!(path.starts_with(&format!("/uploads/child-{child_id}-")));
    assert!(path.ends_with(".webp"));

    let file_name = path.strip_prefix("/uploads/").unwrap();
    let bytes = tokio::fs::read(uploads.path().join(file_name)).await.unwrap();
    assert_eq!(bytes, b"artifact-bytes");
}

#[tokio::test]
async fn defaults_extension_when_url_has_none() {
    let addr = spawn_host().await;
    let uploads = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    let path = fetch_and_store(
        &client,
        &format!("http://{addr}/no-extension"),
        Uuid::new_v4(),
        uploads.path(),
    )
    .await
    .unwrap();

    assert!(path.ends_with(".jpg"));
}

#[tokio::test]
async fn non_success_status_fails_without_creating_a_file() {
    let addr = spawn_host().await;
    let uploads = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    let err = fetch_and_store(
        &client,
        &format!("http://{addr}/gone.png"),
        Uuid::new_v4(),
        uploads.path(),
    )
    .await
    .unwrap_err();

    assert_matches!(err, PipelineError::Download { status, status_text } => {
        assert_eq!(status, StatusCode::NOT_FOUND.as_u16());
        assert_eq!(status_text, "Not Found");
    });

    let mut entries = tokio::fs::read_dir(uploads.path()).await.unwrap();
    assert!(entries.next_entry().await.unwrap().is_none());
}

#[tokio::test]
async fn unreachable_host_is_a_transfer_error() {
    let uploads = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    let err = fetch_and_store(
        &client,
        // Port 1 is never listening locally.
        "http://127.0.0.1:1/face.png",
        Uuid::new_v4(),
        uploads.path(),
    )
    .await
    .unwrap_err();

    assert_matches!(err, PipelineError::Transfer(_));
}
