//! Error types for pdfbib-core

use std::path::PathBuf;

use pdfbib_bibtex::BibtexError;
use pdfbib_identifiers::IdentifierError;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PdfbibError>;

/// Main error type for pipeline operations
#[derive(Error, Debug)]
pub enum PdfbibError {
    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    #[error("Record error: {0}")]
    Bibtex(#[from] BibtexError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The ADS response page holds no record block
    #[error("No record in response")]
    EmptyResponse,
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to write TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Invalid journal variant: {0}")]
    InvalidJournal(String),
}
