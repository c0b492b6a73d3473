// src/error.rs

//! Error types for the survey pipeline

use thiserror::Error;

/// Errors raised while surveying manifests
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Download error: {0}")]
    DownloadError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Initialization error: {0}")]
    InitError(String),
}

/// Result type for survey operations
pub type Result<T> = std::result::Result<T, Error>;
