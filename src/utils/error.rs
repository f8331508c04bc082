use crate::domain::model::RequestId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Fetch task was aborted: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("No response settled for request: {request}")]
    MissingResponse { request: RequestId },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, BootError>;
