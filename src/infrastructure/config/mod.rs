use crate::domain::tts::VoiceTable;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Endpoint of the external speech synthesis service
    pub speech_endpoint: String,
    pub audio_output_dir: String,
    pub max_text_length: usize,
    pub max_chunk_length: usize,
    pub silence_gap_ms: u32,
    pub speech_rate: String,
    pub speech_volume: String,
    pub voices: VoiceTable,
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

        let default_voices = VoiceTable::default();
        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            speech_endpoint: env::var("SPEECH_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:5500/synthesize".to_string()),
            audio_output_dir: env::var("AUDIO_OUTPUT_DIR")
                .unwrap_or_else(|_| "audio_outputs".to_string()),
            max_text_length: env::var("MAX_TEXT_LENGTH")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()?,
            max_chunk_length: env::var("MAX_CHUNK_LENGTH")
                .unwrap_or_else(|_| "500".to_string())
                .parse()?,
            silence_gap_ms: env::var("SILENCE_GAP_MS")
                .unwrap_or_else(|_| "200".to_string())
                .parse()?,
            speech_rate: env::var("SPEECH_RATE").unwrap_or_else(|_| "+0%".to_string()),
            speech_volume: env::var("SPEECH_VOLUME").unwrap_or_else(|_| "+0%".to_string()),
            voices: VoiceTable {
                ar_male: env::var("VOICE_AR_MALE").unwrap_or(default_voices.ar_male),
                ar_female: env::var("VOICE_AR_FEMALE").unwrap_or(default_voices.ar_female),
                en_male: env::var("VOICE_EN_MALE").unwrap_or(default_voices.en_male),
                en_female: env::var("VOICE_EN_FEMALE").unwrap_or(default_voices.en_female),
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
