use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route("/synthesize", post(TtsController::synthesize))
        .route("/upload-text", post(TtsController::upload_text))
        .route("/voices", get(TtsController::voices))
        .route("/download/:filename", get(TtsController::download))
        .route("/audio-files", get(TtsController::list_audio_files))
        .route(
            "/audio-files/:filename",
            delete(TtsController::delete_audio_file),
        )
        .with_state(tts_controller);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/status", get(health::status))
        .merge(tts_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
