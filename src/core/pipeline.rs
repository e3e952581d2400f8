use std::sync::Arc;

use crate::{
    analysis::{
        segmenter::split_sentences,
        word_counter::count_words,
        SentimentAnalyzer,
    },
    core::{
        AnalysisOutcome,
        AnalysisResult,
        SentencePair,
        VersemoodError,
    },
    translation::TranslationService,
};

/// Everything an analysis run needs. Cloned into the background task.
#[derive(Clone)]
pub struct AnalysisTools {
    pub translator: Arc<dyn TranslationService + Send + Sync>,
    pub sentiment: Arc<SentimentAnalyzer>,
}

impl std::fmt::Debug for AnalysisTools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisTools")
            .field("translator", &"Arc<dyn TranslationService>")
            .field("sentiment", &"Arc<SentimentAnalyzer>")
            .finish()
    }
}

/// Runs the full analysis: translate, score the whole text, pair and
/// score sentences, count words. Translation failure degrades to the
/// original text with a warning; later failures propagate to the caller.
pub fn analyze_text(text: &str, tools: &AnalysisTools) -> Result<AnalysisOutcome, VersemoodError> {
    let original_text = text.to_string();

    let (translated_text, translation_warning) = match tools.translator.translate(text) {
        Ok(translated) => (translated, None),
        Err(e) => {
            eprintln!("Translation failed, analyzing original text: {}", e);
            let warning =
                format!("Translation failed ({}). Results reflect the untranslated text.", e);
            (original_text.clone(), Some(warning))
        }
    };

    let overall = tools.sentiment.score(&translated_text);

    // Positional pairing up to the shorter side. Lossy when translation
    // changes the sentence count.
    let original_sentences = split_sentences(&original_text);
    let translated_sentences = split_sentences(&translated_text);
    let sentence_pairs: Vec<SentencePair> = original_sentences
        .into_iter()
        .zip(translated_sentences)
        .map(|(original, translated)| {
            let polarity = tools.sentiment.score(&translated).polarity;
            SentencePair { original, translated, polarity }
        })
        .collect();

    let word_frequencies = count_words(&translated_text);

    println!(
        "Analyzed {} sentence pairs, {} distinct words",
        sentence_pairs.len(),
        word_frequencies.len()
    );

    Ok(AnalysisOutcome {
        result: AnalysisResult {
            overall_polarity: overall.polarity,
            overall_subjectivity: overall.subjectivity,
            sentence_pairs,
            word_frequencies,
            original_text,
            translated_text,
        },
        translation_warning,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::classify::PolarityLabel;

    /// Returns the input untouched, like translating English to English.
    struct IdentityTranslator;

    impl TranslationService for IdentityTranslator {
        fn translate(&self, text: &str) -> Result<String, VersemoodError> {
            Ok(text.to_string())
        }
    }

    struct FailingTranslator;

    impl TranslationService for FailingTranslator {
        fn translate(&self, _text: &str) -> Result<String, VersemoodError> {
            Err(VersemoodError::Translation("service unavailable".to_string()))
        }
    }

    /// Rewrites everything into a single sentence.
    struct CollapsingTranslator;

    impl TranslationService for CollapsingTranslator {
        fn translate(&self, _text: &str) -> Result<String, VersemoodError> {
            Ok("One merged sentence.".to_string())
        }
    }

    fn tools(translator: Arc<dyn TranslationService + Send + Sync>) -> AnalysisTools {
        AnalysisTools { translator, sentiment: Arc::new(SentimentAnalyzer::new()) }
    }

    #[test]
    fn mixed_text_end_to_end() {
        let tools = tools(Arc::new(IdentityTranslator));
        let outcome = analyze_text("I love this. I hate that.", &tools).unwrap();
        let result = &outcome.result;

        assert!(outcome.translation_warning.is_none());
        assert_eq!(result.translated_text, result.original_text);

        let mut words = result.word_frequencies.clone();
        words.sort();
        assert_eq!(words, vec![("hate".to_string(), 1), ("love".to_string(), 1)]);

        assert_eq!(result.sentence_pairs.len(), 2);
        assert_eq!(result.sentence_pairs[0].original, "I love this");
        assert!(result.sentence_pairs[0].polarity > 0.0);
        assert!(result.sentence_pairs[1].polarity < 0.0);

        // love and hate cancel out
        assert_eq!(PolarityLabel::from_score(result.overall_polarity), PolarityLabel::Neutral);
    }

    #[test]
    fn translation_failure_falls_back_to_original() {
        let tools = tools(Arc::new(FailingTranslator));
        let outcome = analyze_text("Todo esto es maravilloso.", &tools).unwrap();

        assert_eq!(outcome.result.translated_text, outcome.result.original_text);
        assert_eq!(outcome.result.translated_text, "Todo esto es maravilloso.");
        assert!(outcome.translation_warning.is_some());
    }

    #[test]
    fn pair_count_is_capped_by_shorter_side() {
        let tools = tools(Arc::new(CollapsingTranslator));
        let outcome = analyze_text("One. Two. Three.", &tools).unwrap();

        // 3 original sentences, 1 translated sentence
        assert_eq!(outcome.result.sentence_pairs.len(), 1);
        assert_eq!(outcome.result.sentence_pairs[0].original, "One");
        assert_eq!(outcome.result.sentence_pairs[0].translated, "One merged sentence");
    }

    #[test]
    fn empty_text_produces_empty_result() {
        let tools = tools(Arc::new(IdentityTranslator));
        let outcome = analyze_text("", &tools).unwrap();

        assert!(outcome.result.sentence_pairs.is_empty());
        assert!(outcome.result.word_frequencies.is_empty());
        assert_eq!(outcome.result.overall_polarity, 0.0);
    }
}
