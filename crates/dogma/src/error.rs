use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    CliError(String),

    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    ParsingError(#[from] serde_json::Error),

    #[error("Request task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    /// The request was handled but did not succeed.
    #[error("Request failed with status {0}")]
    Status(u16),
}
