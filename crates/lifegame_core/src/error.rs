//! Error types for lifegame_core.
//!
//! Every construction-time failure is reported through [`LifeError`] before
//! any frame is rendered. Once the render loop runs, only terminal I/O can
//! fail, and that failure is fatal.

use thiserror::Error;

/// Main error type for simulation and rendering operations.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Negative grid dimensions
    #[error("Invalid dimensions: {rows}x{cols}")]
    InvalidDimension { rows: i64, cols: i64 },

    /// A numeric parameter outside its accepted range
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Colour name not found in the palette
    #[error("Invalid color name: {0}")]
    InvalidColorName(String),

    /// Operation not allowed in the current lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or file system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lifegame operations.
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    /// Creates a new invalid parameter error.
    #[must_use]
    pub fn invalid_parameter<S: Into<String>>(name: &'static str, reason: S) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Creates a new configuration error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<toml::de::Error> for LifeError {
    fn from(error: toml::de::Error) -> Self {
        Self::Config(error.to_string())
    }
}
