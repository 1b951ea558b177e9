use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Unknown setting `{0}`")]
    UnknownKey(String),

    #[error("Invalid value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },
}
