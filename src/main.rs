use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sawti_backend::controllers::tts::TtsController;
use sawti_backend::domain::tts::TtsService;
use sawti_backend::infrastructure::config::{Config, LogFormat};
use sawti_backend::infrastructure::http::start_http_server;
use sawti_backend::infrastructure::repositories::HttpSpeechRepository;
use sawti_backend::infrastructure::storage::AudioStorage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting Sawti TTS Backend on {}:{}", config.host, config.port);

    // Prepare audio output directory
    let storage = Arc::new(AudioStorage::new(&config.audio_output_dir)?);
    tracing::info!(
        output_dir = %config.audio_output_dir,
        "Audio output directory ready"
    );

    // Speech synthesis client
    tracing::info!(
        endpoint = %config.speech_endpoint,
        "Initializing speech synthesis client"
    );
    let speech_repo = Arc::new(HttpSpeechRepository::new(
        reqwest::Client::new(),
        config.speech_endpoint.clone(),
    ));

    let config = Arc::new(config);

    // Services
    let tts_service = Arc::new(TtsService::new(
        speech_repo,
        storage.clone(),
        config.voices.clone(),
        config.max_chunk_length,
        config.silence_gap_ms,
        config.speech_rate.clone(),
        config.speech_volume.clone(),
    ));

    // Controllers
    let tts_controller = Arc::new(TtsController::new(
        tts_service,
        storage,
        config.voices.clone(),
        config.max_text_length,
    ));

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sawti_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sawti_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
