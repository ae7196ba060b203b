pub mod cors;
pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;

pub use cors::{cors_headers_middleware, CorsPolicy};
pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes and middleware
pub fn build_router(
    config: &Config,
    tts_controller: Arc<TtsController>,
) -> Result<Router, axum::http::header::InvalidHeaderValue> {
    let cors_policy = CorsPolicy::new(&config.allowed_origin)?;

    // `/` serves callers that post to the bare function URL
    let tts_routes = Router::new()
        .route("/", post(TtsController::synthesize))
        .route("/api/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .merge(tts_routes)
        .layer(cors_policy.preflight_layer())
        .layer(middleware::from_fn_with_state(cors_policy, cors_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, tts_controller)?;

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
