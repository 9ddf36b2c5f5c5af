use super::audio::AudioError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
    #[error("no audio segments to assemble")]
    EmptyAssembly,
    #[error("audio assembly failed: {0}")]
    Assembly(String),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AudioError> for TtsServiceError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::EmptyInput => TtsServiceError::EmptyAssembly,
            AudioError::Wav(e) => TtsServiceError::Assembly(e.to_string()),
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Synthesis(msg) => AppError::ExternalService(msg),
            TtsServiceError::EmptyAssembly => {
                AppError::Internal("no audio segments were produced".to_string())
            }
            TtsServiceError::Assembly(msg) => AppError::Internal(msg),
            TtsServiceError::Storage(e) => AppError::Internal(e.to_string()),
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
