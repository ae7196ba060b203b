use super::tts_repository::TtsRepository;
use crate::domain::tts::{EngineTier, Voice};
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    fn engine_for(tier: EngineTier) -> Engine {
        match tier {
            EngineTier::Neural => Engine::Neural,
            EngineTier::Standard => Engine::Standard,
        }
    }

    /// Call AWS Polly and collect the whole audio stream
    async fn call_polly(&self, text: &str, voice: Voice, tier: EngineTier) -> Result<Vec<u8>, String> {
        let voice_id = VoiceId::from(voice.as_str());
        let engine = Self::engine_for(tier);

        tracing::info!(
            voice = %voice,
            engine = %tier,
            output_format = "Mp3",
            text_length = text.chars().count(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    error_display = %e,
                    voice = %voice,
                    engine = %tier,
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {}", aws_sdk_polly::error::DisplayErrorContext(&e))
            })?;

        tracing::debug!("AWS Polly synthesize_speech successful, reading audio stream");

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, voice: Voice, engine: EngineTier) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let audio_data = self.call_polly(text, voice, engine).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "polly",
            latency_ms = duration.as_millis(),
            characters_count = text.chars().count(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
