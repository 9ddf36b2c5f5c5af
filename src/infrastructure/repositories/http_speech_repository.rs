use super::speech_repository::SpeechRepository;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    voice: &'a str,
    rate: &'a str,
    volume: &'a str,
}

/// HTTP implementation of the speech repository.
///
/// Posts one JSON request per chunk to the synthesis endpoint (the edge-tts
/// bridge service) and returns the raw audio bytes from the response body.
pub struct HttpSpeechRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSpeechRepository {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SpeechRepository for HttpSpeechRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        rate: &str,
        volume: &str,
    ) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = voice_id,
            rate = rate,
            volume = volume,
            text_length = text.len(),
            "calling speech synthesis service"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SpeechRequest {
                text,
                voice: voice_id,
                rate,
                volume,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    voice = voice_id,
                    "speech synthesis request failed"
                );
                format!("speech service request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                voice = voice_id,
                body = %body,
                "speech synthesis service returned an error"
            );
            return Err(format!("speech service returned {}: {}", status, body));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to read audio from speech service response");
                format!("failed to read audio stream: {}", e)
            })?
            .to_vec();

        let duration = start_time.elapsed();
        let throughput_chars_per_sec = if duration.as_secs_f64() > 0.0 {
            text.len() as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        tracing::info!(
            voice = voice_id,
            latency_ms = duration.as_millis() as u64,
            characters_count = text.len(),
            audio_size_bytes = audio_bytes.len(),
            throughput_chars_per_sec = format!("{:.2}", throughput_chars_per_sec),
            "speech synthesis call completed"
        );

        Ok(audio_bytes)
    }
}
