pub mod audio_cache_repository;
pub mod notification_repository;
pub mod polly_tts_repository;
pub mod s3_audio_cache_repository;
pub mod sns_notification_repository;
pub mod tts_repository;

pub use audio_cache_repository::{AudioCacheRepository, CacheLookup, AUDIO_CONTENT_TYPE};
pub use notification_repository::NotificationRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use s3_audio_cache_repository::S3AudioCacheRepository;
pub use sns_notification_repository::SnsNotificationRepository;
pub use tts_repository::TtsRepository;
