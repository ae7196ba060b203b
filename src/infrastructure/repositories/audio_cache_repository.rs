use crate::domain::tts::CacheKey;
use async_trait::async_trait;
use std::time::Duration;

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Outcome of an existence probe. Transport failures are the `Err` arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup {
    Found,
    NotFound,
}

/// Durable store for synthesized audio, addressed by [`CacheKey`]
#[async_trait]
pub trait AudioCacheRepository: Send + Sync {
    /// Probe for an existing object. A missing object is `Ok(NotFound)`.
    async fn exists(&self, key: &CacheKey) -> Result<CacheLookup, String>;

    /// Time-limited retrieval link for the object, no side effects
    async fn presigned_url(&self, key: &CacheKey, expires_in: Duration) -> Result<String, String>;

    /// Store audio bytes. Keys are content-addressed so overwrites are harmless.
    async fn put(&self, key: &CacheKey, audio: Vec<u8>, content_type: &str) -> Result<(), String>;
}
