use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("boundary regex"));

/// Splits text into sentences on any run of `.`, `!`, `?`.
/// Results are trimmed; empty segments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_sentences;

    #[test]
    fn splits_on_punctuation_runs() {
        let sentences = split_sentences("First one. Second one!! And... a third?");
        assert_eq!(sentences, vec!["First one", "Second one", "And", "a third"]);
    }

    #[test]
    fn never_yields_blank_entries() {
        let sentences = split_sentences("...  !?  One thing.  ");
        assert_eq!(sentences, vec!["One thing"]);
        for s in split_sentences("a. . b.  . c") {
            assert!(!s.trim().is_empty());
        }
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
