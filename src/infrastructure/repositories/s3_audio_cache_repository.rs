use super::audio_cache_repository::{AudioCacheRepository, CacheLookup};
use crate::domain::tts::CacheKey;
use async_trait::async_trait;
use aws_sdk_s3::{
    error::DisplayErrorContext, presigning::PresigningConfig, primitives::ByteStream,
    types::ObjectCannedAcl, Client as S3Client,
};
use std::sync::Arc;
use std::time::Duration;

/// S3 bucket holding synthesized audio
pub struct S3AudioCacheRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
}

impl S3AudioCacheRepository {
    pub fn new(s3_client: Arc<S3Client>, bucket: String) -> Self {
        Self { s3_client, bucket }
    }
}

#[async_trait]
impl AudioCacheRepository for S3AudioCacheRepository {
    async fn exists(&self, key: &CacheKey) -> Result<CacheLookup, String> {
        let result = self
            .s3_client
            .head_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .send()
            .await;

        match result {
            Ok(_) => Ok(CacheLookup::Found),
            Err(err) if err.as_service_error().is_some_and(|e| e.is_not_found()) => {
                Ok(CacheLookup::NotFound)
            }
            Err(err) => {
                tracing::error!(
                    error = %DisplayErrorContext(&err),
                    bucket = %self.bucket,
                    key = %key,
                    "S3 head_object failed"
                );
                Err(format!("S3 HeadObject error: {}", DisplayErrorContext(&err)))
            }
        }
    }

    async fn presigned_url(&self, key: &CacheKey, expires_in: Duration) -> Result<String, String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| format!("Invalid presigning config: {}", e))?;

        let request = self
            .s3_client
            .get_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .presigned(presigning)
            .await
            .map_err(|e| {
                tracing::error!(error = %DisplayErrorContext(&e), key = %key, "S3 presign failed");
                format!("S3 presign error: {}", DisplayErrorContext(&e))
            })?;

        Ok(request.uri().to_string())
    }

    async fn put(&self, key: &CacheKey, audio: Vec<u8>, content_type: &str) -> Result<(), String> {
        let size = audio.len();

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .body(ByteStream::from(audio))
            .content_type(content_type)
            .acl(ObjectCannedAcl::BucketOwnerFullControl)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    bucket = %self.bucket,
                    key = %key,
                    "S3 put_object failed"
                );
                format!("S3 PutObject error: {}", DisplayErrorContext(&e))
            })?;

        tracing::debug!(bucket = %self.bucket, key = %key, audio_size_bytes = size, "Audio stored");

        Ok(())
    }
}
