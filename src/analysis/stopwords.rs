use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Tokens shorter than this never make it into the frequency table.
pub const MIN_WORD_LEN: usize = 3;

/// Fixed bilingual function-word set. The tool accepts Spanish input and
/// analyzes its English translation, so both languages are filtered.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Spanish
        "a", "al", "de", "del", "la", "las", "lo", "los", "y", "o", "el", "ella", "ellos",
        "como", "en", "por", "para",
        // English
        "the", "and", "is", "to", "of", "in", "that", "it", "with", "on", "this", "was",
        "for", "as", "be", "are", "at", "by", "from",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::is_stopword;

    #[test]
    fn covers_both_languages() {
        assert!(is_stopword("the"));
        assert!(is_stopword("para"));
        assert!(!is_stopword("love"));
        assert!(!is_stopword("corazón"));
    }
}
