//! Error types for Snowfall

use thiserror::Error;

/// The main error type for Snowfall operations
#[derive(Debug, Error)]
pub enum SnowfallError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Snowfall operations
pub type Result<T> = std::result::Result<T, SnowfallError>;

impl From<toml::de::Error> for SnowfallError {
    fn from(err: toml::de::Error) -> Self {
        SnowfallError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for SnowfallError {
    fn from(err: toml::ser::Error) -> Self {
        SnowfallError::TomlSerError(err.to_string())
    }
}
