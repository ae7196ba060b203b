use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tts_cache_backend::domain::tts::{CacheKey, EngineTier, NotificationEvent, Voice};
use tts_cache_backend::infrastructure::repositories::{
    AudioCacheRepository, CacheLookup, NotificationRepository, TtsRepository,
};

pub const FAKE_BUCKET_URL: &str = "https://tts-cache-test.s3.amazonaws.com";

pub fn mock_audio_bytes() -> Vec<u8> {
    // Minimal MP3 frame header
    vec![0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisCall {
    pub text: String,
    pub voice: Voice,
    pub engine: EngineTier,
}

/// Records synthesis calls in place of Polly
#[derive(Default)]
pub struct FakeTtsRepository {
    calls: Mutex<Vec<SynthesisCall>>,
    failing: AtomicBool,
}

impl FakeTtsRepository {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<SynthesisCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl TtsRepository for FakeTtsRepository {
    async fn synthesize(&self, text: &str, voice: Voice, engine: EngineTier) -> Result<Vec<u8>, String> {
        self.calls.lock().push(SynthesisCall {
            text: text.to_string(),
            voice,
            engine,
        });

        if self.failing.load(Ordering::SeqCst) {
            return Err("AWS Polly error: ThrottlingException".to_string());
        }

        Ok(mock_audio_bytes())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub audio: Vec<u8>,
    pub content_type: String,
}

/// In-memory bucket
#[derive(Default)]
pub struct FakeAudioCacheRepository {
    objects: Mutex<HashMap<String, StoredObject>>,
    put_count: Mutex<usize>,
    failing_probe: AtomicBool,
    failing_put: AtomicBool,
}

impl FakeAudioCacheRepository {
    pub fn set_failing_probe(&self, failing: bool) {
        self.failing_probe.store(failing, Ordering::SeqCst);
    }

    pub fn set_failing_put(&self, failing: bool) {
        self.failing_put.store(failing, Ordering::SeqCst);
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().get(key).cloned()
    }

    pub fn put_count(&self) -> usize {
        *self.put_count.lock()
    }
}

#[async_trait]
impl AudioCacheRepository for FakeAudioCacheRepository {
    async fn exists(&self, key: &CacheKey) -> Result<CacheLookup, String> {
        if self.failing_probe.load(Ordering::SeqCst) {
            return Err("S3 HeadObject error: AccessDenied".to_string());
        }

        if self.objects.lock().contains_key(key.as_str()) {
            Ok(CacheLookup::Found)
        } else {
            Ok(CacheLookup::NotFound)
        }
    }

    async fn presigned_url(&self, key: &CacheKey, expires_in: Duration) -> Result<String, String> {
        Ok(format!(
            "{}/{}?X-Amz-Expires={}&X-Amz-Signature=fake",
            FAKE_BUCKET_URL,
            key,
            expires_in.as_secs()
        ))
    }

    async fn put(&self, key: &CacheKey, audio: Vec<u8>, content_type: &str) -> Result<(), String> {
        if self.failing_put.load(Ordering::SeqCst) {
            return Err("S3 PutObject error: NoSuchBucket".to_string());
        }

        *self.put_count.lock() += 1;
        self.objects.lock().insert(
            key.to_string(),
            StoredObject {
                audio,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}

/// Collects published events in place of SNS
#[derive(Default)]
pub struct FakeNotificationRepository {
    attempts: Mutex<Vec<NotificationEvent>>,
    failing: AtomicBool,
}

impl FakeNotificationRepository {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Every publish attempt, including failed ones
    pub fn attempts(&self) -> Vec<NotificationEvent> {
        self.attempts.lock().clone()
    }
}

#[async_trait]
impl NotificationRepository for FakeNotificationRepository {
    async fn publish(&self, event: &NotificationEvent) -> Result<(), String> {
        self.attempts.lock().push(event.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err("SNS Publish error: NotFound".to_string());
        }

        Ok(())
    }
}
