use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_cache_backend::controllers::tts::TtsController;
use tts_cache_backend::domain::tts::TtsService;
use tts_cache_backend::infrastructure::config::{Config, LogFormat, CACHE_TTL_DAYS};
use tts_cache_backend::infrastructure::http::start_http_server;
use tts_cache_backend::infrastructure::repositories::{
    PollyTtsRepository, S3AudioCacheRepository, SnsNotificationRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS cache backend on {}:{}",
        config.host,
        config.port
    );

    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    if !has_access_key || !has_secret_key {
        tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
    }

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    tracing::info!(region = ?aws_config.region(), "AWS configuration loaded");

    // One client per service for the whole process
    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));
    let sns_client = Arc::new(aws_sdk_sns::Client::new(&aws_config));
    tracing::info!("AWS Polly, S3 and SNS clients initialized");

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories (inject AWS clients)
    tracing::info!(
        bucket = %config.cache_bucket,
        topic_arn = %config.sns_topic_arn,
        cache_ttl_days = CACHE_TTL_DAYS,
        "Instantiating repositories (cache lifecycle not enforced)"
    );
    let tts_repo = Arc::new(PollyTtsRepository::new(polly_client));
    let cache_repo = Arc::new(S3AudioCacheRepository::new(
        s3_client,
        config.cache_bucket.clone(),
    ));
    let notification_repo = Arc::new(SnsNotificationRepository::new(
        sns_client,
        config.sns_topic_arn.clone(),
    ));

    // 2. Services (inject repositories)
    tracing::info!("Instantiating services...");
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        cache_repo,
        notification_repo,
        config.presigned_url_ttl(),
    ));

    // 3. Controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let tts_controller = Arc::new(TtsController::new(tts_service, config.is_development()));

    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tts_cache_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
