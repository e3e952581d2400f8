use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::stopwords::{
    is_stopword,
    MIN_WORD_LEN,
};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word regex"));

/// Lowercased word tokens in input order.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    WORD_RE.find_iter(text).map(|m| m.as_str().to_lowercase()).collect()
}

/// Tallies content words, dropping stopwords and short tokens.
/// Output is sorted descending by count; ties keep first-encountered
/// order (the sort is stable). Empty input yields an empty table.
pub fn count_words(text: &str) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokenize(text) {
        if token.chars().count() < MIN_WORD_LEN || is_stopword(&token) {
            continue;
        }

        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_stopwords_and_short_tokens() {
        let counts = count_words("The cat and the dog sat by an old oak");

        let words: Vec<&str> = counts.iter().map(|(w, _)| w.as_str()).collect();
        assert!(words.contains(&"cat"));
        assert!(words.contains(&"dog"));
        assert!(!words.contains(&"the"));
        assert!(!words.contains(&"and"));
        assert!(!words.contains(&"by"));
        assert!(!words.contains(&"an")); // shorter than three characters

        for (word, _) in &counts {
            assert!(word.chars().count() >= MIN_WORD_LEN);
            assert!(!crate::analysis::stopwords::is_stopword(word));
        }
    }

    #[test]
    fn is_case_insensitive() {
        let counts = count_words("Rain RAIN rain");
        assert_eq!(counts, vec![("rain".to_string(), 3)]);
    }

    #[test]
    fn sorts_descending_with_stable_ties() {
        let counts = count_words("night star night moon star night sun");

        assert_eq!(counts[0], ("night".to_string(), 3));
        assert_eq!(counts[1], ("star".to_string(), 2));
        // moon and sun tie at 1; moon appeared first
        assert_eq!(counts[2], ("moon".to_string(), 1));
        assert_eq!(counts[3], ("sun".to_string(), 1));
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(count_words("").is_empty());
        assert!(count_words("a an of").is_empty());
    }
}
