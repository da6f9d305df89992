use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::traits::BaseImageStore;

/// Folder all event images land in on the hosting side.
const UPLOAD_FOLDER: &str = "DevEvent";

/// Cloudinary API client for image uploads
pub struct CloudinaryClient {
    cloud_name: String,
    api_key: String,
    api_secret: String,
    client: reqwest::Client,
}

/// Cloudinary upload API response
#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: String,
}

impl CloudinaryClient {
    /// Create a new Cloudinary client
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            cloud_name,
            api_key,
            api_secret,
            client,
        })
    }

    /// Sign the upload parameters.
    ///
    /// Cloudinary signs the alphabetically-sorted parameter string (all
    /// params except file, api_key, and the signature itself) with the
    /// API secret appended. We request sha256 instead of the legacy
    /// default.
    fn signature(&self, timestamp: i64) -> String {
        let to_sign = format!(
            "folder={}&timestamp={}{}",
            UPLOAD_FOLDER, timestamp, self.api_secret
        );
        let digest = Sha256::digest(to_sign.as_bytes());
        hex::encode(digest)
    }
}

#[async_trait]
impl BaseImageStore for CloudinaryClient {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = self.signature(timestamp);

        let file_part = reqwest::multipart::Part::bytes(bytes)
            .file_name("upload")
            .mime_str(content_type)
            .context("Invalid image content type")?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", UPLOAD_FOLDER)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to send Cloudinary upload request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Cloudinary API error {}: {}", status, body);
        }

        let upload: CloudinaryUploadResponse = response
            .json()
            .await
            .context("Failed to parse Cloudinary response")?;

        Ok(upload.secure_url)
    }
}
