use std::{
    sync::mpsc::{
        self,
        Receiver,
        Sender,
    },
    thread,
};

use super::types::TaskResult;
use crate::core::pipeline::{
    analyze_text,
    AnalysisTools,
};

/// Runs analysis off the UI thread and hands results back over a
/// channel. The UI drains the channel once per frame with
/// [`TaskManager::poll_results`].
pub struct TaskManager {
    receiver: Receiver<TaskResult>,
    sender: Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { receiver, sender }
    }

    /// Collects everything background tasks have produced since the
    /// last call. Never blocks.
    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }
        results
    }

    pub fn run_analysis(&self, text: String, tools: AnalysisTools) {
        let sender = self.sender.clone();
        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Analyzing text...".to_string()));
            let outcome = analyze_text(&text, &tools).map_err(|e| e.to_string());
            if sender.send(TaskResult::Analysis(outcome)).is_err() {
                eprintln!("Analysis finished after the UI went away");
            }
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::Arc,
        time::Duration,
    };

    use super::*;
    use crate::{
        analysis::SentimentAnalyzer,
        core::VersemoodError,
        translation::TranslationService,
    };

    struct IdentityTranslator;

    impl TranslationService for IdentityTranslator {
        fn translate(&self, text: &str) -> Result<String, VersemoodError> {
            Ok(text.to_string())
        }
    }

    #[test]
    fn analysis_result_arrives_over_channel() {
        let mut manager = TaskManager::new();
        let tools = AnalysisTools {
            translator: Arc::new(IdentityTranslator),
            sentiment: Arc::new(SentimentAnalyzer::new()),
        };

        manager.run_analysis("I love this song.".to_string(), tools);

        let mut analysis = None;
        for _ in 0..50 {
            for result in manager.poll_results() {
                if let TaskResult::Analysis(outcome) = result {
                    analysis = Some(outcome);
                }
            }
            if analysis.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }

        let outcome = analysis.expect("analysis never finished").expect("analysis failed");
        assert_eq!(outcome.result.sentence_pairs.len(), 1);
        assert!(outcome.result.overall_polarity > 0.0);
    }
}
