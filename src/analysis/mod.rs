pub mod classify;
pub mod segmenter;
pub mod sentiment;
pub mod stopwords;
pub mod word_counter;

pub use classify::{PolarityLabel, SubjectivityLabel};
pub use sentiment::{Sentiment, SentimentAnalyzer};
