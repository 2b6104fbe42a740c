//! Error types for Cozy Co

use thiserror::Error;

/// Result type alias using Cozy Co's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Cozy Co operations
///
/// Art generation itself is total; these cover the helpers around it
/// (weighted draws, configuration loading, writing output).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed or serialized
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
