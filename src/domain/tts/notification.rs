use super::cache_key::CacheKey;
use super::voice::Voice;
use chrono::{DateTime, Utc};

pub const NOTIFICATION_SUBJECT: &str = "New TTS Audio Created";

/// Characters of the source text carried in a notification
const SNIPPET_CHARS: usize = 100;

/// Published once per cache miss, never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    pub voice: Voice,
    pub snippet: String,
    pub key: CacheKey,
    pub generated_at: DateTime<Utc>,
}

impl NotificationEvent {
    pub fn new(voice: Voice, text: &str, key: CacheKey, generated_at: DateTime<Utc>) -> Self {
        Self {
            voice,
            snippet: text.chars().take(SNIPPET_CHARS).collect(),
            key,
            generated_at,
        }
    }

    pub fn subject(&self) -> &'static str {
        NOTIFICATION_SUBJECT
    }

    /// Plain-text body read by the topic subscribers
    pub fn message(&self) -> String {
        format!(
            "Voice used: {}\nSnippet: {}...\nS3 Object: {}\nGenerated at: {} UTC",
            self.voice,
            self.snippet,
            self.key,
            self.timestamp()
        )
    }

    /// ISO-8601 without offset. Microseconds are printed only when non-zero.
    fn timestamp(&self) -> String {
        if self.generated_at.timestamp_subsec_micros() == 0 {
            self.generated_at.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            self.generated_at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
        }
    }
}
