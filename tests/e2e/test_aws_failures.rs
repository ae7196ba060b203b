use crate::e2e::helpers;

use helpers::assertions::{assert_cors_headers, assert_json_content_type};
use helpers::aws_mocks::{
    create_unreachable_polly_client, create_unreachable_s3_client, create_unreachable_sns_client,
};
use helpers::{spawn_app, test_config};
use hyper::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tts_cache_backend::infrastructure::config::{Config, Environment};
use tts_cache_backend::infrastructure::repositories::{
    PollyTtsRepository, S3AudioCacheRepository, SnsNotificationRepository,
};

async fn spawn_with_unreachable_aws(config: Config) -> helpers::api_client::TestClient {
    let tts_repo = Arc::new(PollyTtsRepository::new(Arc::new(create_unreachable_polly_client())));
    let cache_repo = Arc::new(S3AudioCacheRepository::new(
        Arc::new(create_unreachable_s3_client()),
        config.cache_bucket.clone(),
    ));
    let notification_repo = Arc::new(SnsNotificationRepository::new(
        Arc::new(create_unreachable_sns_client()),
        config.sns_topic_arn.clone(),
    ));

    spawn_app(&config, tts_repo, cache_repo, notification_repo).await
}

#[tokio::test]
async fn it_should_surface_s3_transport_failure_as_500() {
    let client = spawn_with_unreachable_aws(test_config()).await;

    let response = client
        .post("/api/tts", &json!({ "text": "Hello world", "voiceId": "Joanna" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_json_content_type(&response);
    assert_cors_headers(&response);
    assert!(
        response.error_message().starts_with("S3 HeadObject error"),
        "unexpected message: {}",
        response.error_message()
    );
}

#[tokio::test]
async fn it_should_hide_s3_failure_details_in_production() {
    let client = spawn_with_unreachable_aws(Config {
        environment: Environment::Production,
        ..test_config()
    })
    .await;

    let response = client
        .post("/api/tts", &json!({ "text": "Hello world", "voiceId": "Joanna" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_message(), "Internal server error");
}

#[tokio::test]
async fn it_should_validate_before_calling_aws() {
    let client = spawn_with_unreachable_aws(test_config()).await;

    let response = client
        .post("/api/tts", &json!({ "text": "", "voiceId": "Joanna" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}
