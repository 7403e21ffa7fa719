// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShacklesError {
    /// A template could not be filled from the call arguments. The payload is
    /// the raw template text, not the offending key.
    #[error("Cannot format '{0}'")]
    ArgumentFormat(String),

    #[error("Action not found: {0}")]
    ActionNotFound(String),

    #[error("Malformed call request: {0}")]
    MalformedRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{role} file does not exist: {path}")]
    MissingFile { role: String, path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ShacklesError>;
