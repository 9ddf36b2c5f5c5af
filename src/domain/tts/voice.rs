use super::language::LanguageCode;
use serde::{Deserialize, Serialize};

/// Requested speaker gender; defaults to female when unspecified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Static `(language, gender) -> voice id` resolution table.
///
/// Voice ids are opaque to the pipeline; the defaults are the neural voices
/// of the synthesis backend. Entries can be overridden through configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceTable {
    pub ar_male: String,
    pub ar_female: String,
    pub en_male: String,
    pub en_female: String,
}

impl Default for VoiceTable {
    fn default() -> Self {
        Self {
            ar_male: "ar-EG-ShakirNeural".to_string(),
            ar_female: "ar-EG-SalmaNeural".to_string(),
            en_male: "en-US-GuyNeural".to_string(),
            en_female: "en-US-JennyNeural".to_string(),
        }
    }
}

impl VoiceTable {
    /// Resolve the voice id for a language/gender pair
    pub fn voice_for(&self, language: LanguageCode, gender: Gender) -> &str {
        match (language, gender) {
            (LanguageCode::Arabic, Gender::Male) => &self.ar_male,
            (LanguageCode::Arabic, Gender::Female) => &self.ar_female,
            (LanguageCode::English, Gender::Male) => &self.en_male,
            (LanguageCode::English, Gender::Female) => &self.en_female,
        }
    }
}
