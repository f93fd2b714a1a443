//! Error types for the reviewsense library.
//!
//! All fallible operations return [`ReviewSenseError`]. The classification
//! and bucketing functions in [`crate::sentiment`] are total and never
//! produce one; errors come from reading, scoring and writing records.
//!
//! # Examples
//!
//! ```
//! use reviewsense::error::{ReviewSenseError, Result};
//!
//! fn load_something() -> Result<()> {
//!     Err(ReviewSenseError::config("num_threads must be positive"))
//! }
//!
//! match load_something() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for reviewsense operations.
#[derive(Error, Debug)]
pub enum ReviewSenseError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading or writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lexicon loading errors
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// A single review record could not be read or enriched.
    #[error("Record error at row {row}: {message}")]
    Record { row: usize, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ReviewSenseError.
pub type Result<T> = std::result::Result<T, ReviewSenseError>;

impl ReviewSenseError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        ReviewSenseError::Lexicon(msg.into())
    }

    /// Create a new record error for the given 1-based data row.
    pub fn record<S: Into<String>>(row: usize, msg: S) -> Self {
        ReviewSenseError::Record {
            row,
            message: msg.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ReviewSenseError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ReviewSenseError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ReviewSenseError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ReviewSenseError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        ReviewSenseError::Other(format!("Internal error: {}", msg.into()))
    }
}
