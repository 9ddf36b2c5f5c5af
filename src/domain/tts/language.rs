use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};
use serde::{Deserialize, Serialize};

/// ISO 639-1 language codes supported by the TTS system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl LanguageCode {
    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Arabic => "ar",
            LanguageCode::English => "en",
        }
    }

    /// Parse a caller-supplied language tag.
    ///
    /// `"auto"` returns `None` (detect per sentence); `"ar"` selects Arabic;
    /// any other tag falls back to English, matching the voice table's
    /// unknown-language behavior.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "auto" => None,
            "ar" => Some(LanguageCode::Arabic),
            _ => Some(LanguageCode::English),
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn is_arabic_char(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}')
}

fn is_latin_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Per-sentence language classifier.
///
/// Decision procedure, evaluated in order:
/// 1. Script presence: only Arabic code points -> `ar`; only Latin -> `en`.
/// 2. Mixed script: count Arabic vs Latin code points; `ar` only if Arabic
///    is strictly greater (an exact tie resolves to `en`).
/// 3. Statistical fallback for script-less text (digits, punctuation) via
///    lingua, restricted to the two languages we synthesize; an unconfident
///    guess defaults to `en`.
pub struct LanguageClassifier {
    detector: LanguageDetector,
}

impl LanguageClassifier {
    pub fn new() -> Self {
        let detector =
            LanguageDetectorBuilder::from_languages(&[Language::Arabic, Language::English])
                .build();
        Self { detector }
    }

    pub fn classify(&self, text: &str) -> LanguageCode {
        let arabic_count = text.chars().filter(|c| is_arabic_char(*c)).count();
        let latin_count = text.chars().filter(|c| is_latin_char(*c)).count();

        match (arabic_count > 0, latin_count > 0) {
            (true, false) => LanguageCode::Arabic,
            (false, true) => LanguageCode::English,
            (true, true) => {
                if arabic_count > latin_count {
                    LanguageCode::Arabic
                } else {
                    LanguageCode::English
                }
            }
            (false, false) => self.statistical_fallback(text),
        }
    }

    /// Classify each sentence independently; no cross-sentence smoothing.
    pub fn classify_each(&self, sentences: &[String]) -> Vec<(String, LanguageCode)> {
        sentences
            .iter()
            .map(|sentence| (sentence.clone(), self.classify(sentence)))
            .collect()
    }

    fn statistical_fallback(&self, text: &str) -> LanguageCode {
        match self.detector.detect_language_of(text) {
            Some(Language::Arabic) => LanguageCode::Arabic,
            Some(_) => LanguageCode::English,
            None => {
                tracing::debug!(
                    text_length = text.len(),
                    "could not detect language, falling back to English"
                );
                LanguageCode::English
            }
        }
    }
}

impl Default for LanguageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_pure_arabic() {
        let classifier = LanguageClassifier::new();
        assert_eq!(classifier.classify("مرحبا بالعالم"), LanguageCode::Arabic);
    }

    #[test]
    fn test_classify_pure_english() {
        let classifier = LanguageClassifier::new();
        assert_eq!(classifier.classify("Hello world"), LanguageCode::English);
    }

    #[test]
    fn test_classify_mixed_arabic_dominant() {
        let classifier = LanguageClassifier::new();
        // 3 Arabic words vs 1 English word
        assert_eq!(
            classifier.classify("hello مرحبا بك جدا"),
            LanguageCode::Arabic
        );
    }

    #[test]
    fn test_classify_mixed_english_dominant() {
        let classifier = LanguageClassifier::new();
        assert_eq!(
            classifier.classify("welcome to the conference يا أهلا"),
            LanguageCode::English
        );
    }

    #[test]
    fn test_classify_exact_tie_favors_english() {
        let classifier = LanguageClassifier::new();
        // "abc" vs three Arabic letters: 3 vs 3
        assert_eq!(classifier.classify("abc كتب"), LanguageCode::English);
    }

    #[test]
    fn test_classify_scriptless_defaults_to_english() {
        let classifier = LanguageClassifier::new();
        assert_eq!(classifier.classify("12345"), LanguageCode::English);
        assert_eq!(classifier.classify("?!"), LanguageCode::English);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = LanguageClassifier::new();
        let inputs = ["مرحبا", "hello", "hello مرحبا بك جدا", "123"];
        for input in inputs {
            assert_eq!(classifier.classify(input), classifier.classify(input));
        }
    }

    #[test]
    fn test_classify_each_preserves_order() {
        let classifier = LanguageClassifier::new();
        let sentences = vec!["Hello world.".to_string(), "مرحبا بالعالم.".to_string()];
        let tagged = classifier.classify_each(&sentences);
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0], ("Hello world.".to_string(), LanguageCode::English));
        assert_eq!(
            tagged[1],
            ("مرحبا بالعالم.".to_string(), LanguageCode::Arabic)
        );
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(LanguageCode::from_tag("auto"), None);
        assert_eq!(LanguageCode::from_tag("ar"), Some(LanguageCode::Arabic));
        assert_eq!(LanguageCode::from_tag("en"), Some(LanguageCode::English));
        assert_eq!(LanguageCode::from_tag("fr"), Some(LanguageCode::English));
    }
}
