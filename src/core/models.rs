use std::path::Path;

/// One original sentence aligned positionally with its translation.
/// Alignment is by index only: if translation changes the sentence count,
/// trailing sentences of the longer side are dropped.
#[derive(Debug, Clone)]
pub struct SentencePair {
    pub original: String,   // Sentence from the input text
    pub translated: String, // Sentence at the same index in the translated text
    pub polarity: f32,      // Polarity of the translated sentence, -1..1
}

/// Everything one analysis run produces. Built fresh per request,
/// never persisted.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub overall_polarity: f32,                // -1 (negative) .. 1 (positive)
    pub overall_subjectivity: f32,            // 0 (objective) .. 1 (subjective)
    pub sentence_pairs: Vec<SentencePair>,    // min(original, translated) pairs
    pub word_frequencies: Vec<(String, u32)>, // Descending by count, ties first-seen
    pub original_text: String,
    pub translated_text: String,
}

/// Analysis result plus the degrade-gracefully warning, if translation
/// fell back to the original text.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub translation_warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFileType {
    Txt,
    Csv,
    Md,
    Other(String),
}

impl InputFileType {
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

        match ext.as_str() {
            "txt" => InputFileType::Txt,
            "csv" => InputFileType::Csv,
            "md" => InputFileType::Md,
            other => InputFileType::Other(other.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, InputFileType::Other(_))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::InputFileType;

    #[test]
    fn recognizes_supported_extensions() {
        assert_eq!(InputFileType::from_path(Path::new("lyrics.txt")), InputFileType::Txt);
        assert_eq!(InputFileType::from_path(Path::new("data.CSV")), InputFileType::Csv);
        assert_eq!(InputFileType::from_path(Path::new("notes.md")), InputFileType::Md);
        assert!(InputFileType::from_path(Path::new("song.md")).is_supported());
    }

    #[test]
    fn rejects_everything_else() {
        let file_type = InputFileType::from_path(Path::new("movie.mp4"));
        assert_eq!(file_type, InputFileType::Other("mp4".to_string()));
        assert!(!file_type.is_supported());
        assert!(!InputFileType::from_path(Path::new("no_extension")).is_supported());
    }
}
