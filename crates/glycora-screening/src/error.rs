use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("invalid screening policy: {0}")]
    Policy(#[from] serde_json::Error),

    #[error("invalid survey payload: {0}")]
    Payload(#[from] glycora_core::error::CoreError),
}
