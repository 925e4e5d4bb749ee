//! Image host client.
//!
//! Identity photos are stored on Cloudinary and only their `secure_url`
//! is kept in the database. Requests use Cloudinary's signed upload:
//! the signed parameters are sorted by name, joined as `k=v&k=v`, suffixed
//! with the API secret and hashed with SHA-256.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;
use url::Url;

use crate::config::{CloudinaryConfig, UPLOAD_TIMEOUT_SECONDS};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    pub secure_url: String,
    pub public_id: String,
}

/// Remote storage for identity photos
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload a local file into `folder` and return its public URL
    async fn upload(&self, path: &Path, folder: &str) -> AppResult<UploadedImage>;
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Signs a parameter set the way the upload API expects.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Cloudinary upload client
pub struct CloudinaryClient {
    http: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self { http, config })
    }

    /// `{base}/v1_1/{cloud}/image/upload`
    pub fn upload_endpoint(&self) -> AppResult<Url> {
        let mut endpoint = self.config.upload_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| AppError::config(format!("invalid upload URL: {}", self.config.upload_url)))?
            .pop_if_empty()
            .extend(["v1_1", self.config.cloud_name.as_str(), "image", "upload"]);
        Ok(endpoint)
    }

    async fn build_form(&self, path: &Path, folder: &str, timestamp: &str) -> AppResult<Form> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let signature = sign(&[("folder", folder), ("timestamp", timestamp)], self.config.api_secret());

        Ok(Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("folder", folder.to_string())
            .text("timestamp", timestamp.to_string())
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256"))
    }

    async fn parse_upload_response(response: Response) -> AppResult<UploadedImage> {
        let status = response.status();

        if status.is_success() {
            let uploaded: UploadedImage = response
                .json()
                .await
                .map_err(|e| AppError::image_host(format!("unreadable upload response: {e}")))?;
            debug!(status = %status, public_id = %uploaded.public_id, "Upload response parsed successfully");
            return Ok(uploaded);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        debug!(status = %status, error = %message, "Upload request failed");
        Err(AppError::image_host(format!("upload rejected ({status}): {message}")))
    }
}

#[async_trait]
impl ImageHost for CloudinaryClient {
    async fn upload(&self, path: &Path, folder: &str) -> AppResult<UploadedImage> {
        let endpoint = self.upload_endpoint()?;
        let timestamp = Utc::now().timestamp().to_string();
        debug!(file = ?path, folder = %folder, endpoint = %endpoint, "Uploading image");

        let form = self.build_form(path, folder, &timestamp).await?;
        let response = self.http.post(endpoint).multipart(form).send().await?;

        Self::parse_upload_response(response).await
    }
}
