use thiserror::Error;

/// Failures at the crate's fallible edges. Classification itself is total.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Invalid classifier options: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    #[error("Invalid classification input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("Failed to serialize classification result: {0}")]
    Serialize(#[source] serde_json::Error),
}
