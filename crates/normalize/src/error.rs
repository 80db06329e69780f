use thiserror::Error;

/// Errors that can occur while validating a normalization config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
