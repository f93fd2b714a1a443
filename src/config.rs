//! Configuration for enrichment runs.
//!
//! # Examples
//!
//! ```
//! use reviewsense::config::{EnrichConfig, RatingPolicy};
//!
//! let config: EnrichConfig = serde_json::from_str(
//!     r#"{"parallel": false, "rating_policy": {"default": 3}}"#,
//! ).unwrap();
//!
//! assert!(!config.parallel);
//! assert_eq!(config.rating_policy, RatingPolicy::Default(3));
//! assert_eq!(config.batch_size, 10_000);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewSenseError};

/// What to do with a review whose rating is missing.
///
/// Ratings that are present but outside 1..=5 are never affected; they
/// flow through the classifier's catch-all branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingPolicy {
    /// Fail the run with a record error.
    #[default]
    Reject,
    /// Drop the record and count it in the report.
    Skip,
    /// Classify with this rating instead.
    Default(i64),
}

/// Configuration for an enrichment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Enrich each batch on a thread pool instead of the calling thread.
    pub parallel: bool,
    /// Worker threads for parallel runs (None = number of CPUs).
    pub num_threads: Option<usize>,
    /// Reviews read, enriched and written per batch.
    pub batch_size: usize,
    /// Handling of reviews without a rating.
    pub rating_policy: RatingPolicy,
    /// Field delimiter for CSV input and output.
    pub delimiter: char,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            num_threads: None,
            batch_size: 10_000,
            rating_policy: RatingPolicy::Reject,
            delimiter: ',',
        }
    }
}

impl EnrichConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: EnrichConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == Some(0) {
            return Err(ReviewSenseError::config("num_threads must be at least 1"));
        }
        if self.batch_size == 0 {
            return Err(ReviewSenseError::config("batch_size must be at least 1"));
        }
        if !self.delimiter.is_ascii() {
            return Err(ReviewSenseError::config(format!(
                "delimiter '{}' is not a single-byte character",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// The effective number of worker threads.
    pub fn thread_count(&self) -> usize {
        self.num_threads.unwrap_or_else(num_cpus::get)
    }
}
