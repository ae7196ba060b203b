use super::voice::Voice;
use sha2::{Digest, Sha256};

/// Content-addressed object key for synthesized audio.
///
/// Layout is `{voice}/{sha256_hex("{voice}-{text}")}.mp3`. Audio already stored
/// in the bucket is addressed this way, so the format must not change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn derive(voice: Voice, text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(voice.as_str().as_bytes());
        hasher.update(b"-");
        hasher.update(text.as_bytes());
        let digest = hex::encode(hasher.finalize());

        Self(format!("{}/{}.mp3", voice.as_str(), digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
