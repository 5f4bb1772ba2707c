//! Attachment upload handlers.
//!
//! The service never proxies file bytes; clients upload directly to
//! S3-compatible object storage through a short-lived presigned PUT URL.

use crate::config::StorageConfig;
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use actix_web::{web, HttpResponse};
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use serde::Deserialize;
use std::time::Duration;
use uuid::Uuid;

/// Presigned URL expiry (5 minutes)
const PRESIGNED_URL_EXPIRY_SECS: u64 = 300;

/// S3 client plus the storage settings needed to build public URLs.
#[derive(Clone)]
pub struct Uploader {
    client: Client,
    config: StorageConfig,
}

impl Uploader {
    pub async fn from_config(config: StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "static",
        );
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint.clone())
            .credentials_provider(credentials)
            .load()
            .await;
        let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            config,
        }
    }

    /// Generate a presigned PUT URL for direct upload.
    pub async fn presign_put(&self, key: &str, content_type: &str) -> Result<String> {
        let presigning = PresigningConfig::builder()
            .expires_in(Duration::from_secs(PRESIGNED_URL_EXPIRY_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("Presigning config failed: {e}")))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| AppError::Internal(format!("Presigned URL generation failed: {e}")))?;

        Ok(request.uri().to_string())
    }

    /// Public download URL, assuming the bucket is reachable at
    /// `bucket.endpoint-host`.
    pub fn public_url(&self, key: &str) -> String {
        let endpoint_host = self
            .config
            .endpoint
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        format!("https://{}.{}/{}", self.config.bucket, endpoint_host, key)
    }
}

#[derive(Debug, Deserialize)]
pub struct SignedUrlRequest {
    pub mime_type: Option<String>,
}

/// Issue a presigned upload URL for the calling user
pub async fn create_signed_url(
    uploader: web::Data<Option<Uploader>>,
    user: AuthUser,
    payload: web::Json<SignedUrlRequest>,
) -> Result<HttpResponse> {
    let Some(uploader) = uploader.as_ref() else {
        return Err(AppError::NotConfigured(
            "File uploads are not configured on this server yet. \
             Please ask the admin to set the STORAGE_* environment variables."
                .to_string(),
        ));
    };

    let content_type = payload
        .mime_type
        .as_deref()
        .unwrap_or("application/octet-stream");
    let key = format!("{}/{}", user.id, Uuid::new_v4());

    let url = uploader.presign_put(&key, content_type).await?;
    let public_url = uploader.public_url(&key);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "url": url,
        "key": key,
        "public_url": public_url,
    })))
}
