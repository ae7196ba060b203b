use serde::{Deserialize, Serialize};

/// Voice used when the requested one is not on the allow-list
pub const DEFAULT_VOICE: Voice = Voice::Joanna;

/// Polly voices this service is allowed to synthesize with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    Joanna,
    Matthew,
    Lucia,
    Zeina,
}

/// Polly engine tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineTier {
    Neural,
    Standard,
}

impl Voice {
    pub const ALL: [Voice; 4] = [Voice::Joanna, Voice::Matthew, Voice::Lucia, Voice::Zeina];

    /// Get the Polly voice identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Joanna => "Joanna",
            Voice::Matthew => "Matthew",
            Voice::Lucia => "Lucia",
            Voice::Zeina => "Zeina",
        }
    }

    /// Exact, case-sensitive lookup on the allow-list
    pub fn from_id(voice_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|voice| voice.as_str() == voice_id)
    }

    /// Resolve a requested identifier, falling back to the default voice
    pub fn from_id_or_default(voice_id: &str) -> Self {
        Self::from_id(voice_id).unwrap_or(DEFAULT_VOICE)
    }

    /// Zeina has no neural variant
    pub fn engine(&self) -> EngineTier {
        match self {
            Voice::Joanna | Voice::Matthew | Voice::Lucia => EngineTier::Neural,
            Voice::Zeina => EngineTier::Standard,
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl EngineTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineTier::Neural => "neural",
            EngineTier::Standard => "standard",
        }
    }
}

impl std::fmt::Display for EngineTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
