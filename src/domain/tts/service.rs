use super::audio::AudioAssembler;
use super::error::TtsServiceError;
use super::language::{LanguageClassifier, LanguageCode};
use super::text::TextProcessor;
use super::voice::{Gender, VoiceTable};
use crate::infrastructure::repositories::SpeechRepository;
use crate::infrastructure::storage::AudioStorage;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub filename: String,
    pub char_count: usize,
    pub sentence_count: usize,
    pub chunk_count: usize,
    pub duration_ms: u64,
}

/// Drives the synthesis pipeline for one request:
/// normalize -> segment -> chunk -> classify -> dispatch -> assemble -> store.
///
/// All state below is request-agnostic configuration; per-request data lives
/// on the stack of `synthesize`.
pub struct TtsService {
    speech_repo: Arc<dyn SpeechRepository>,
    storage: Arc<AudioStorage>,
    processor: TextProcessor,
    classifier: LanguageClassifier,
    voices: VoiceTable,
    assembler: AudioAssembler,
    rate: String,
    volume: String,
}

impl TtsService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        speech_repo: Arc<dyn SpeechRepository>,
        storage: Arc<AudioStorage>,
        voices: VoiceTable,
        max_chunk_length: usize,
        silence_gap_ms: u32,
        rate: String,
        volume: String,
    ) -> Self {
        Self {
            speech_repo,
            storage,
            processor: TextProcessor::new(max_chunk_length),
            classifier: LanguageClassifier::new(),
            voices,
            assembler: AudioAssembler::new(silence_gap_ms),
            rate,
            volume,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize bilingual text to a single audio file.
    ///
    /// This operation:
    /// - Normalizes and segments the text into sentences, chunking over-long ones
    /// - Tags each chunk with a language (or applies the caller's override)
    /// - Synthesizes the chunks sequentially, in order, one voice per language
    /// - Assembles the audio segments with a fixed silence gap and persists
    ///   the result
    ///
    /// Any synthesis failure fails the whole request; no partial audio is
    /// ever written.
    async fn synthesize(
        &self,
        text: &str,
        language: Option<LanguageCode>,
        gender: Gender,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: &str,
        language: Option<LanguageCode>,
        gender: Gender,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        let start_time = std::time::Instant::now();

        let normalized = self.processor.normalize(text);
        if normalized.is_empty() {
            return Err(TtsServiceError::Invalid(
                "text is empty after normalization".to_string(),
            ));
        }

        let sentences = self.processor.segment(&normalized);
        let sentence_count = sentences.len();

        let chunks: Vec<String> = sentences
            .iter()
            .flat_map(|sentence| self.processor.chunk(sentence))
            .collect();

        let tagged: Vec<(String, LanguageCode)> = match language {
            Some(lang) => chunks.into_iter().map(|chunk| (chunk, lang)).collect(),
            None => self.classifier.classify_each(&chunks),
        };

        tracing::info!(
            text_length = text.len(),
            sentence_count,
            chunk_count = tagged.len(),
            language_override = language.map(|l| l.as_str()),
            gender = gender.as_str(),
            "TTS synthesis request"
        );

        let artifacts = self.dispatch(&tagged, gender).await?;
        let assembled = self.assembler.assemble(&artifacts)?;

        let filename = self.storage.generate_filename("speech", "wav");
        self.storage.save(&filename, &assembled).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            filename = %filename,
            latency_ms = duration.as_millis() as u64,
            segment_count = artifacts.len(),
            audio_size_bytes = assembled.len(),
            "TTS synthesis completed"
        );

        Ok(TtsSynthesisResult {
            filename,
            char_count: normalized.chars().count(),
            sentence_count,
            chunk_count: tagged.len(),
            duration_ms: duration.as_millis() as u64,
        })
    }
}

impl TtsService {
    /// Synthesize each tagged chunk sequentially, preserving input order.
    ///
    /// Blank chunks are skipped without producing an artifact. The first
    /// synthesis failure aborts the whole dispatch.
    async fn dispatch(
        &self,
        tagged: &[(String, LanguageCode)],
        gender: Gender,
    ) -> Result<Vec<Vec<u8>>, TtsServiceError> {
        let mut artifacts = Vec::with_capacity(tagged.len());

        for (index, (chunk, language)) in tagged.iter().enumerate() {
            if chunk.trim().is_empty() {
                continue;
            }

            let voice_id = self.voices.voice_for(*language, gender);
            tracing::debug!(
                chunk_index = index,
                chunk_length = chunk.len(),
                language = %language,
                voice = voice_id,
                "dispatching chunk to synthesis service"
            );

            let audio = self
                .speech_repo
                .synthesize(chunk, voice_id, &self.rate, &self.volume)
                .await
                .map_err(TtsServiceError::Synthesis)?;

            artifacts.push(audio);
        }

        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use std::io::Cursor;
    use std::sync::Mutex;

    struct MockSpeechRepository {
        calls: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl MockSpeechRepository {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SpeechRepository for MockSpeechRepository {
        async fn synthesize(
            &self,
            text: &str,
            voice_id: &str,
            _rate: &str,
            _volume: &str,
        ) -> Result<Vec<u8>, String> {
            if self.fail {
                return Err("synthesis backend unavailable".to_string());
            }
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), voice_id.to_string()));
            Ok(fake_wav(100))
        }
    }

    fn fake_wav(samples: usize) -> Vec<u8> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for _ in 0..samples {
            writer.write_sample(500i16).unwrap();
        }
        writer.finalize().unwrap();
        cursor.into_inner()
    }

    fn make_service(repo: Arc<MockSpeechRepository>, dir: &std::path::Path) -> TtsService {
        let storage = Arc::new(AudioStorage::new(dir).unwrap());
        TtsService::new(
            repo,
            storage,
            VoiceTable::default(),
            500,
            200,
            "+0%".to_string(),
            "+0%".to_string(),
        )
    }

    #[tokio::test]
    async fn test_synthesize_bilingual_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(MockSpeechRepository::new());
        let service = make_service(repo.clone(), dir.path());

        let result = service
            .synthesize("Hello world. مرحبا بالعالم.", None, Gender::Female)
            .await
            .unwrap();

        assert_eq!(result.sentence_count, 2);
        assert_eq!(result.chunk_count, 2);

        let calls = repo.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("Hello world.".to_string(), "en-US-JennyNeural".to_string()));
        assert_eq!(
            calls[1],
            ("مرحبا بالعالم.".to_string(), "ar-EG-SalmaNeural".to_string())
        );

        assert!(dir.path().join(&result.filename).exists());
    }

    #[tokio::test]
    async fn test_synthesize_language_override_applies_to_all_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(MockSpeechRepository::new());
        let service = make_service(repo.clone(), dir.path());

        service
            .synthesize(
                "Hello world. مرحبا بالعالم.",
                Some(LanguageCode::Arabic),
                Gender::Male,
            )
            .await
            .unwrap();

        for (_, voice) in repo.calls() {
            assert_eq!(voice, "ar-EG-ShakirNeural");
        }
    }

    #[tokio::test]
    async fn test_synthesize_rejects_text_empty_after_normalization() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(MockSpeechRepository::new());
        let service = make_service(repo.clone(), dir.path());

        let err = service
            .synthesize("  @@@ ###  ", None, Gender::Female)
            .await
            .unwrap_err();
        assert!(matches!(err, TtsServiceError::Invalid(_)));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_synthesize_failure_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(MockSpeechRepository::failing());
        let service = make_service(repo, dir.path());

        let err = service
            .synthesize("Hello world.", None, Gender::Female)
            .await
            .unwrap_err();
        assert!(matches!(err, TtsServiceError::Synthesis(_)));

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(entries.is_empty(), "no partial output should be written");
    }

    #[tokio::test]
    async fn test_single_sentence_produces_one_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(MockSpeechRepository::new());
        let service = make_service(repo.clone(), dir.path());

        let result = service
            .synthesize("مرحبا بالعالم", None, Gender::Female)
            .await
            .unwrap();

        assert_eq!(result.sentence_count, 1);
        assert_eq!(repo.calls().len(), 1);
        assert_eq!(repo.calls()[0].1, "ar-EG-SalmaNeural");
    }
}
