use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    #[error("invalid diabetes class code: {0}")]
    InvalidClassCode(i64),
}
