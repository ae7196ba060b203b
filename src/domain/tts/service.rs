use super::cache_key::CacheKey;
use super::error::TtsServiceError;
use super::notification::NotificationEvent;
use super::validation::validate_request;
use super::voice::{EngineTier, Voice};
use super::SynthesisRequest;
use crate::infrastructure::repositories::{
    AudioCacheRepository, CacheLookup, NotificationRepository, TtsRepository, AUDIO_CONTENT_TYPE,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub download_url: String,
    pub key: CacheKey,
    pub voice: Voice,
    pub engine: EngineTier,
    pub cache_hit: bool,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    cache_repo: Arc<dyn AudioCacheRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    link_ttl: Duration,
}

impl TtsService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        cache_repo: Arc<dyn AudioCacheRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        link_ttl: Duration,
    ) -> Self {
        Self {
            tts_repo,
            cache_repo,
            notification_repo,
            link_ttl,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Resolve a request to a download link for its audio
    ///
    /// This operation:
    /// - Coerces the voice to the allow-list and checks text length
    /// - Returns the cached object when one exists
    /// - Otherwise synthesizes with Polly, stores the audio and publishes a notification
    ///
    /// A download link is issued on both paths.
    async fn synthesize(&self, request: SynthesisRequest) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<TtsSynthesisResult, TtsServiceError> {
        tracing::info!(
            requested_voice = %request.voice_id,
            text_length = request.text.chars().count(),
            "TTS synthesis request"
        );

        // 1. Validate and resolve voice / engine
        let validated = validate_request(request.text, &request.voice_id)?;
        let key = CacheKey::derive(validated.voice, &validated.text);

        // 2. Check cache
        let lookup = self
            .cache_repo
            .exists(&key)
            .await
            .map_err(TtsServiceError::Dependency)?;

        if lookup == CacheLookup::Found {
            tracing::info!(key = %key, voice = %validated.voice, "TTS cache hit");
            let download_url = self.issue_link(&key).await?;
            return Ok(TtsSynthesisResult {
                download_url,
                key,
                voice: validated.voice,
                engine: validated.engine,
                cache_hit: true,
            });
        }

        tracing::info!(
            key = %key,
            voice = %validated.voice,
            engine = %validated.engine,
            "TTS cache miss - synthesizing"
        );

        // 3. Synthesize
        let audio_data = self
            .tts_repo
            .synthesize(&validated.text, validated.voice, validated.engine)
            .await
            .map_err(TtsServiceError::Dependency)?;

        // 4. Store
        let audio_size = audio_data.len();
        self.cache_repo
            .put(&key, audio_data, AUDIO_CONTENT_TYPE)
            .await
            .map_err(TtsServiceError::Dependency)?;

        tracing::info!(key = %key, audio_size = audio_size, "TTS result cached");

        // 5. Notify
        let event = NotificationEvent::new(validated.voice, &validated.text, key.clone(), Utc::now());
        self.notify(&event).await;

        // 6. Issue link
        let download_url = self.issue_link(&key).await?;

        Ok(TtsSynthesisResult {
            download_url,
            key,
            voice: validated.voice,
            engine: validated.engine,
            cache_hit: false,
        })
    }
}

impl TtsService {
    async fn issue_link(&self, key: &CacheKey) -> Result<String, TtsServiceError> {
        self.cache_repo
            .presigned_url(key, self.link_ttl)
            .await
            .map_err(TtsServiceError::Dependency)
    }

    /// Audio is already stored at this point, so a failed publish only loses the event
    async fn notify(&self, event: &NotificationEvent) {
        if let Err(e) = self.notification_repo.publish(event).await {
            tracing::warn!(
                error = %e,
                key = %event.key,
                "Failed to publish TTS notification, continuing"
            );
        }
    }
}
