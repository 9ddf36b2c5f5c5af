use super::voice::Gender;
use serde::{Deserialize, Serialize};

/// Request for POST /synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    /// "ar", "en" or "auto" (default: auto-detect per sentence)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Response for POST /synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeResponse {
    pub success: bool,
    pub filename: String,
    pub download_url: String,
    pub duration_ms: u64,
    pub text_length: usize,
    pub sentences_count: usize,
}
