//! Cloudinary client tests against a local mock server.

use std::path::Path;

use httpmock::prelude::*;
use serde_json::json;
use url::Url;

use registre_civil::config::CloudinaryConfig;
use registre_civil::errors::AppError;
use registre_civil::infra::{CloudinaryClient, ImageHost};

fn client_for(server: &MockServer) -> CloudinaryClient {
    let config = CloudinaryConfig::new("demo", "123456", "secret", Url::parse(&server.base_url()).unwrap());
    CloudinaryClient::new(config).unwrap()
}

fn photo(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("photo_identite1.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
    path
}

#[tokio::test]
async fn test_upload_returns_secure_url() {
    let server = MockServer::start_async().await;
    let upload = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1_1/demo/image/upload")
                .body_contains("name=\"folder\"")
                .body_contains("cni/recto")
                .body_contains("name=\"signature_algorithm\"")
                .body_contains("123456");
            then.status(200).header("content-type", "application/json").json_body(json!({
                "public_id": "cni/recto/xyz",
                "secure_url": "https://res.cloudinary.com/demo/image/upload/v1/cni/recto/xyz.png",
                "format": "png"
            }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let uploaded = client_for(&server).upload(&photo(dir.path()), "cni/recto").await.unwrap();

    upload.assert_async().await;
    assert_eq!(uploaded.public_id, "cni/recto/xyz");
    assert_eq!(uploaded.secure_url, "https://res.cloudinary.com/demo/image/upload/v1/cni/recto/xyz.png");
}

#[tokio::test]
async fn test_rejected_upload_carries_host_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1_1/demo/image/upload");
            then.status(401).json_body(json!({ "error": { "message": "Invalid Signature" } }));
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = client_for(&server).upload(&photo(dir.path()), "cni/recto").await.unwrap_err();

    match err {
        AppError::ImageHost(msg) => assert!(msg.contains("Invalid Signature"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let server = MockServer::start_async().await;
    let dir = tempfile::tempdir().unwrap();

    let err = client_for(&server)
        .upload(&dir.path().join("absent.png"), "cni/recto")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
}
