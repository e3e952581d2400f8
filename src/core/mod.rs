pub mod errors;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod tasks;

pub use errors::VersemoodError;
pub use models::{AnalysisOutcome, AnalysisResult, InputFileType, SentencePair};
