use async_trait::async_trait;

/// Repository for speech synthesis operations.
/// Abstracts the underlying synthesis backend behind `(text, voice) -> audio`.
///
/// Implementations are responsible for:
/// - Transport to the backend (HTTP, SDK, local engine)
/// - Provider-specific request encoding
/// - Returning one complete audio artifact per call (WAV format)
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize one chunk of text with the given voice.
    ///
    /// # Arguments
    /// * `text` - The prepared chunk (normalized, within length limits)
    /// * `voice_id` - Backend voice identifier, e.g. `ar-EG-SalmaNeural`
    /// * `rate` - Speaking rate adjustment, e.g. `+0%`
    /// * `volume` - Volume adjustment, e.g. `+0%`
    ///
    /// # Errors
    /// Returns error if synthesis fails or the backend is unavailable; the
    /// caller treats any failure as fatal for the current request.
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        rate: &str,
        volume: &str,
    ) -> Result<Vec<u8>, String>;
}
