use crate::core::state::{Size, Ticks};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabError {
    #[error("burst time must be at least 1, got {0}")]
    InvalidBurstTime(Ticks),

    #[error("block size must be at least 1, got {0}")]
    InvalidBlockSize(Size),

    #[error("request size must be at least 1, got {0}")]
    InvalidRequestSize(Size),

    #[error("process arriving at {arrival} with burst {burst} would run past the end of the clock")]
    TimelineOverflow { arrival: Ticks, burst: Ticks },

    #[error("progress store: {0}")]
    Store(#[from] StoreError),

    #[error("configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LabError>;
