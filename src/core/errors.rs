use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersemoodError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("File is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("VersemoodError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for VersemoodError {
    fn from(error: std::io::Error) -> Self {
        VersemoodError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for VersemoodError {
    fn from(error: reqwest::Error) -> Self {
        VersemoodError::Reqwest(Box::new(error))
    }
}
