//! Error types for kitacal.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a calendar or writing an export.
#[derive(Error, Debug)]
pub enum KitacalError {
    #[error("Could not read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse input file {}: {source}", path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date: '{0}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Too many events for one worksheet: {0}")]
    TooManyRows(usize),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Could not write output file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for kitacal operations.
pub type KitacalResult<T> = Result<T, KitacalError>;
