use serde::Deserialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_CACHE_BUCKET: &str = "tts-cache-sedky-net";
pub const DEFAULT_SNS_TOPIC_ARN: &str = "arn:aws:sns:us-east-1:XXXXXXXXXXXX:TTSVoiceGenerated";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://sedky.net";
pub const DEFAULT_PRESIGNED_URL_TTL_SECS: u64 = 3600;

/// Reserved for a bucket lifecycle rule; cached audio is currently kept forever
pub const CACHE_TTL_DAYS: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub aws_region: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Audio cache
    pub cache_bucket: String,
    pub presigned_url_ttl_secs: u64,
    // Notifications
    pub sns_topic_arn: String,
    // CORS
    pub allowed_origin: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            cache_bucket: env::var("TTS_CACHE_BUCKET")
                .unwrap_or_else(|_| DEFAULT_CACHE_BUCKET.to_string()),
            presigned_url_ttl_secs: env::var("PRESIGNED_URL_TTL_SECS")
                .unwrap_or_else(|_| DEFAULT_PRESIGNED_URL_TTL_SECS.to_string())
                .parse()?,
            sns_topic_arn: env::var("TTS_SNS_TOPIC_ARN")
                .unwrap_or_else(|_| DEFAULT_SNS_TOPIC_ARN.to_string()),
            allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn presigned_url_ttl(&self) -> Duration {
        Duration::from_secs(self.presigned_url_ttl_secs)
    }
}
