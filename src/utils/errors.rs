use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Invalid control input: {0}")]
    InvalidControl(String),

    #[error("State error: {0}")]
    StateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("Snapshot error: {0}")]
    SnapshotError(#[from] serde_json::Error),
}
