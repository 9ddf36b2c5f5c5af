pub mod audio;
pub mod dto;
pub mod error;
pub mod language;
pub mod service;
pub mod text;
pub mod voice;

pub use audio::{AudioAssembler, DEFAULT_SILENCE_GAP_MS};
pub use dto::{SynthesizeRequest, SynthesizeResponse};
pub use error::TtsServiceError;
pub use language::{LanguageClassifier, LanguageCode};
pub use service::{TtsService, TtsServiceApi, TtsSynthesisResult};
pub use text::{TextProcessor, DEFAULT_MAX_CHUNK_LENGTH};
pub use voice::{Gender, VoiceTable};
