use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::tts::{SynthesisRequest, SynthesisResponse, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
    expose_error_details: bool,
}

impl TtsController {
    /// `expose_error_details` controls whether upstream failure text reaches callers
    pub fn new(tts_service: Arc<TtsService>, expose_error_details: bool) -> Self {
        Self {
            tts_service,
            expose_error_details,
        }
    }

    /// POST /api/tts - Resolve text to a download link for its speech audio
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        body: Bytes,
    ) -> AppResult<Json<SynthesisResponse>> {
        let request = parse_request(&body)?;

        match controller.tts_service.synthesize(request).await {
            Ok(result) => {
                tracing::info!(
                    key = %result.key,
                    voice = %result.voice,
                    engine = %result.engine,
                    cache_hit = result.cache_hit,
                    "TTS request completed"
                );
                Ok(Json(SynthesisResponse::from(result)))
            }
            Err(e) => {
                let err = AppError::from(e);
                if controller.expose_error_details {
                    Err(err)
                } else {
                    tracing::error!(error = %err, "Redacting error details from response");
                    Err(err.redacted())
                }
            }
        }
    }
}

/// Bodies are parsed by hand so malformed JSON gets the JSON error shape.
/// An empty body is treated as `{}`.
fn parse_request(body: &[u8]) -> AppResult<SynthesisRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SynthesisRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}
