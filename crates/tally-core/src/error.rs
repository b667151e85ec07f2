//! Error types for Tally

use thiserror::Error;

/// The main error type for Tally operations
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Tally operations
pub type Result<T> = std::result::Result<T, TallyError>;

impl From<toml::de::Error> for TallyError {
    fn from(err: toml::de::Error) -> Self {
        TallyError::ConfigParse(err.to_string())
    }
}
