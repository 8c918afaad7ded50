use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}
