use regex::Regex;

/// Default maximum chunk length submitted to the synthesis service
pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 500;

/// Text preparation pipeline: normalization, sentence segmentation and
/// chunking of over-long sentences.
///
/// Regexes are compiled once at construction; the processor itself is
/// immutable and request-agnostic.
pub struct TextProcessor {
    max_chunk_length: usize,
    unsupported: Regex,
    whitespace: Regex,
    sentence_boundary: Regex,
}

impl TextProcessor {
    pub fn new(max_chunk_length: usize) -> Self {
        // Supported alphabet: Arabic script, Latin letters, digits, whitespace
        // and a fixed punctuation set (incl. Arabic comma/semicolon/question mark)
        let unsupported = Regex::new(
            r#"[^\u{0600}-\u{06FF}\u{0750}-\u{077F}a-zA-Z0-9\s.,!?;:'"\-،؛؟]"#,
        )
        .expect("unsupported-character regex is valid");
        let whitespace = Regex::new(r"\s+").expect("whitespace regex is valid");
        // Terminal punctuation (Latin and Arabic) followed by whitespace
        let sentence_boundary =
            Regex::new(r"[.!?،؛؟]+\s+").expect("sentence-boundary regex is valid");

        Self {
            max_chunk_length,
            unsupported,
            whitespace,
            sentence_boundary,
        }
    }

    /// Clean and normalize input text.
    ///
    /// Unsupported characters are dropped first, then whitespace runs are
    /// collapsed to single spaces, so the result is stable under repeated
    /// normalization.
    pub fn normalize(&self, text: &str) -> String {
        let filtered = self.unsupported.replace_all(text, "");
        let collapsed = self.whitespace.replace_all(&filtered, " ");
        collapsed.trim().to_string()
    }

    /// Split normalized text into sentences.
    ///
    /// A sentence ends immediately after `. ! ? ، ؛ ؟` when followed by
    /// whitespace; the punctuation stays attached to the sentence. Text
    /// without any terminal punctuation yields a single sentence.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut last_end = 0;

        for mat in self.sentence_boundary.find_iter(text) {
            let sentence = text[last_end..mat.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            last_end = mat.end();
        }

        let remaining = text[last_end..].trim();
        if !remaining.is_empty() {
            sentences.push(remaining.to_string());
        }

        sentences
    }

    /// Break a sentence longer than the configured maximum into word-aligned
    /// chunks. Words are packed greedily; a single word longer than the limit
    /// becomes its own (oversized) chunk rather than being split.
    pub fn chunk(&self, sentence: &str) -> Vec<String> {
        if sentence.chars().count() <= self.max_chunk_length {
            return vec![sentence.to_string()];
        }

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in sentence.split_whitespace() {
            let word_len = word.chars().count();
            if current_len + word_len + 1 > self.max_chunk_length {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
                current.push_str(word);
                current_len = word_len;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_len += word_len + 1;
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }

}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_LENGTH)
    }
}
