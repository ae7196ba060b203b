use crate::e2e::helpers;

use helpers::assertions::assert_cors_headers;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_preflight_requests(ctx: &mut TestContext) {
    let response = ctx.client.preflight("/api/tts", "https://sedky.net").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_cors_headers(&response);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_advertise_only_the_configured_origin(ctx: &mut TestContext) {
    let response = ctx.client.preflight("/api/tts", "https://evil.example").await.unwrap();

    response.assert_header("access-control-allow-origin", "https://sedky.net");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_add_cors_headers_to_success_and_error_responses(ctx: &mut TestContext) {
    let ok = ctx
        .client
        .post("/api/tts", &json!({ "text": "Hello", "voiceId": "Matthew" }))
        .await
        .unwrap();
    ok.assert_status(StatusCode::OK);
    assert_cors_headers(&ok);

    let bad = ctx
        .client
        .post("/api/tts", &json!({ "text": "" }))
        .await
        .unwrap();
    bad.assert_status(StatusCode::BAD_REQUEST);
    assert_cors_headers(&bad);

    ctx.tts.set_failing(true);
    let failed = ctx
        .client
        .post("/api/tts", &json!({ "text": "Fresh text", "voiceId": "Matthew" }))
        .await
        .unwrap();
    failed.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&failed);
}

#[tokio::test]
async fn it_should_use_configured_origin() {
    let ctx = TestContext::start(tts_cache_backend::infrastructure::config::Config {
        allowed_origin: "https://app.example.org".to_string(),
        ..helpers::test_config()
    })
    .await;

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_header("access-control-allow-origin", "https://app.example.org");
}
