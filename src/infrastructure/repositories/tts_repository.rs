use crate::domain::tts::{EngineTier, Voice};
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (AWS Polly in production).
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech with the given voice and engine tier
    ///
    /// Returns MP3 audio data
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unavailable.
    /// Callers treat every error as fatal; there is no fallback tier.
    async fn synthesize(&self, text: &str, voice: Voice, engine: EngineTier) -> Result<Vec<u8>, String>;
}
