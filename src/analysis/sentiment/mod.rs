mod lexicon;

use std::collections::{
    HashMap,
    HashSet,
};

use once_cell::sync::Lazy;

use crate::analysis::word_counter::tokenize;

/// Words that invert and dampen the polarity of the word they precede.
static NEGATORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["not", "no", "never", "nothing", "neither", "nor"].into_iter().collect());

/// Words that amplify the word they precede.
static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["very", "really", "so", "extremely", "totally", "absolutely", "deeply"].into_iter().collect()
});

const NEGATION_FACTOR: f32 = -0.5;
const INTENSITY_FACTOR: f32 = 1.3;
const INTENSITY_SUBJECTIVITY_FACTOR: f32 = 1.15;

/// Polarity/subjectivity pair for a piece of text. A text with no
/// lexicon hits scores (0.0, 0.0).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sentiment {
    pub polarity: f32,     // -1 (most negative) .. 1 (most positive)
    pub subjectivity: f32, // 0 (factual) .. 1 (personal opinion)
}

/// Lexicon-based scorer. Deterministic and offline: every score is the
/// clamped average over the lexicon words found in the text, with
/// single-token negation and intensification.
pub struct SentimentAnalyzer {
    lexicon: HashMap<&'static str, (f32, f32)>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        let lexicon = lexicon::LEXICON.iter().map(|&(word, p, s)| (word, (p, s))).collect();
        Self { lexicon }
    }

    pub fn score(&self, text: &str) -> Sentiment {
        let mut polarity_sum = 0.0f32;
        let mut subjectivity_sum = 0.0f32;
        let mut hits = 0u32;

        let mut negated = false;
        let mut intensified = false;

        for token in tokenize(text) {
            if NEGATORS.contains(token.as_str()) {
                negated = true;
                continue;
            }
            if INTENSIFIERS.contains(token.as_str()) {
                intensified = true;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.lexicon.get(token.as_str()) {
                let mut polarity = polarity;
                let mut subjectivity = subjectivity;

                if intensified {
                    polarity *= INTENSITY_FACTOR;
                    subjectivity = (subjectivity * INTENSITY_SUBJECTIVITY_FACTOR).min(1.0);
                }
                if negated {
                    polarity *= NEGATION_FACTOR;
                }

                polarity_sum += polarity;
                subjectivity_sum += subjectivity;
                hits += 1;
            }

            // Modifiers only reach across one word.
            negated = false;
            intensified = false;
        }

        if hits == 0 {
            return Sentiment::default();
        }

        Sentiment {
            polarity: (polarity_sum / hits as f32).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / hits as f32).clamp(0.0, 1.0),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify::PolarityLabel;

    #[test]
    fn positive_text_scores_positive() {
        let analyzer = SentimentAnalyzer::new();
        let sentiment = analyzer.score("What a beautiful, wonderful day");

        assert!(sentiment.polarity > 0.0);
        assert_eq!(PolarityLabel::from_score(sentiment.polarity), PolarityLabel::Positive);
    }

    #[test]
    fn negative_text_scores_negative() {
        let analyzer = SentimentAnalyzer::new();
        let sentiment = analyzer.score("A terrible, painful goodbye");

        assert!(sentiment.polarity < 0.0);
        assert_eq!(PolarityLabel::from_score(sentiment.polarity), PolarityLabel::Negative);
    }

    #[test]
    fn text_without_lexicon_hits_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.score("the chair stands near the table"), Sentiment::default());
        assert_eq!(analyzer.score(""), Sentiment::default());
    }

    #[test]
    fn negation_inverts_and_dampens() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.score("good");
        let negated = analyzer.score("not good");

        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert!(negated.polarity.abs() < plain.polarity.abs());
    }

    #[test]
    fn intensifier_amplifies() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.score("sad");
        let intense = analyzer.score("so sad");

        assert!(intense.polarity < plain.polarity);
    }

    #[test]
    fn subjectivity_tracks_personal_language() {
        let analyzer = SentimentAnalyzer::new();
        let personal = analyzer.score("I feel so happy, I love this feeling");
        assert!(personal.subjectivity > 0.5);
    }

    #[test]
    fn scores_stay_in_range() {
        let analyzer = SentimentAnalyzer::new();
        let s = analyzer.score("absolutely wonderful perfect awesome magical amazing");
        assert!(s.polarity <= 1.0);
        assert!(s.subjectivity <= 1.0);
    }
}
