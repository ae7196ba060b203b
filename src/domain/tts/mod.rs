pub mod cache_key;
pub mod error;
pub mod notification;
pub mod service;
pub mod validation;
pub mod voice;

pub use cache_key::CacheKey;
pub use error::TtsServiceError;
pub use notification::NotificationEvent;
use serde::{Deserialize, Deserializer, Serialize};
pub use service::{TtsService, TtsServiceApi, TtsSynthesisResult};
pub use validation::{validate_request, ValidatedRequest, INVALID_TEXT_LENGTH_MESSAGE, MAX_TEXT_CHARS};
pub use voice::{EngineTier, Voice, DEFAULT_VOICE};

fn default_voice_id() -> String {
    DEFAULT_VOICE.as_str().to_string()
}

/// `null` text is read as empty and then fails length validation
fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any non-string voice id falls back to the default voice
fn lenient_voice_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(voice_id) => Ok(voice_id),
        _ => Ok(default_voice_id()),
    }
}

/// Request body for the synthesis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    #[serde(default, deserialize_with = "nullable_text")]
    pub text: String,
    #[serde(
        rename = "voiceId",
        default = "default_voice_id",
        deserialize_with = "lenient_voice_id"
    )]
    pub voice_id: String,
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            voice_id: default_voice_id(),
        }
    }
}

/// Response body for a successful synthesis
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisResponse {
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

impl From<TtsSynthesisResult> for SynthesisResponse {
    fn from(result: TtsSynthesisResult) -> Self {
        Self {
            download_url: result.download_url,
        }
    }
}
