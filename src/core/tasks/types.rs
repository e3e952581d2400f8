use crate::core::AnalysisOutcome;

/// Messages sent back from background tasks to the UI thread. Errors
/// cross the channel as strings so results stay cheap to clone.
#[derive(Debug, Clone)]
pub enum TaskResult {
    Analysis(Result<AnalysisOutcome, String>),
    LoadingMessage(String),
}
