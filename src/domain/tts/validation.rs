use super::error::TtsServiceError;
use super::voice::{EngineTier, Voice};

pub const MAX_TEXT_CHARS: usize = 500;
pub const INVALID_TEXT_LENGTH_MESSAGE: &str = "Input must be 1 to 500 characters.";

/// Request after voice coercion and length checks
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub text: String,
    pub voice: Voice,
    pub engine: EngineTier,
}

/// Unknown voices are coerced to the default rather than rejected.
/// Length is counted in characters, and the text is passed through untouched.
pub fn validate_request(text: String, voice_id: &str) -> Result<ValidatedRequest, TtsServiceError> {
    let voice = Voice::from_id_or_default(voice_id);
    if voice.as_str() != voice_id {
        tracing::debug!(
            requested_voice = voice_id,
            voice = %voice,
            "Voice not on allow-list, using default"
        );
    }

    let char_count = text.chars().count();
    if char_count == 0 || char_count > MAX_TEXT_CHARS {
        return Err(TtsServiceError::Invalid(INVALID_TEXT_LENGTH_MESSAGE.to_string()));
    }

    Ok(ValidatedRequest {
        text,
        voice,
        engine: voice.engine(),
    })
}
