// src/error.rs

//! Unified error handling for the article server.

use thiserror::Error;

/// Result type alias for article operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An article with this source URL is already stored
    #[error("Article already stored for URL: {url}")]
    Duplicate { url: String },

    /// A stored file is structurally corrupt (missing section delimiters)
    #[error("Malformed article file: {0}")]
    Format(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a duplicate-article error for a source URL.
    pub fn duplicate(url: impl Into<String>) -> Self {
        Self::Duplicate { url: url.into() }
    }

    /// Create a structural format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}
