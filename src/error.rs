use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Invalid buffer capacity {0}: must be at least 1")]
    InvalidCapacity(usize),

    #[error("Malformed stats frame: {0}")]
    MalformedFrame(String),

    #[error("Frame source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
