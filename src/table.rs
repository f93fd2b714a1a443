//! Reading reviews from and writing enriched reviews to tabular files.
//!
//! [`ReviewSource`] and [`ReviewSink`] are the seams to the storage side of
//! the pipeline; CSV and JSONL implementations live in the submodules.
//!
//! # Example
//!
//! ```no_run
//! use reviewsense::table::{ReviewSource, TableFormat, open_source};
//!
//! let source = open_source("fact_customer_reviews.csv", TableFormat::Csv, ',').unwrap();
//! for review in source.reviews().unwrap() {
//!     let review = review.unwrap();
//!     println!("{}: {:?}", review.review_id, review.rating);
//! }
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{Result, ReviewSenseError};
use crate::review::{EnrichedReview, Review};

pub mod csv;
pub mod jsonl;

pub use self::csv::{CsvReviewSink, CsvReviewSource};
pub use self::jsonl::{JsonlReviewSink, JsonlReviewSource};

/// Iterator of reviews yielded by a source, in source order.
pub type ReviewIter = Box<dyn Iterator<Item = Result<Review>> + Send>;

/// A supplier of review records.
pub trait ReviewSource: Send {
    /// Open the source and iterate its reviews in order.
    ///
    /// Errors for individual records carry their 1-based data row.
    fn reviews(&self) -> Result<ReviewIter>;
}

/// A consumer of enriched review records.
pub trait ReviewSink {
    /// Write one record.
    fn write(&mut self, record: &EnrichedReview) -> Result<()>;

    /// Flush buffered output. Must be called once after the last write.
    fn finish(&mut self) -> Result<()>;

    /// Write every record in order.
    fn write_all(&mut self, records: &[EnrichedReview]) -> Result<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }
}

/// Supported file formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Comma-separated values with a header row
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl TableFormat {
    /// Guess the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(TableFormat::Csv),
            Some("jsonl") | Some("ndjson") => Ok(TableFormat::Jsonl),
            _ => Err(ReviewSenseError::invalid_argument(format!(
                "cannot infer table format of {}; pass --input-format/--output-format",
                path.display()
            ))),
        }
    }
}

/// Open a review source for `path`.
pub fn open_source<P: AsRef<Path>>(
    path: P,
    format: TableFormat,
    delimiter: char,
) -> Result<Box<dyn ReviewSource>> {
    let path = PathBuf::from(path.as_ref());
    Ok(match format {
        TableFormat::Csv => Box::new(CsvReviewSource::new(path).with_delimiter(delimiter)),
        TableFormat::Jsonl => Box::new(JsonlReviewSource::new(path)),
    })
}

/// Create (or truncate) `path` and return a sink writing to it.
pub fn create_sink<P: AsRef<Path>>(
    path: P,
    format: TableFormat,
    delimiter: char,
) -> Result<Box<dyn ReviewSink>> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    Ok(match format {
        TableFormat::Csv => Box::new(CsvReviewSink::new(writer, delimiter)),
        TableFormat::Jsonl => Box::new(JsonlReviewSink::new(writer)),
    })
}

/// Write a table to `path` all or nothing.
///
/// `write` fills a sink backed by a temporary file in the same directory;
/// the file replaces `path` only when `write` returns `Ok`. On error the
/// temporary file is removed and `path` is left as it was.
pub fn write_atomic<P, T, F>(path: P, format: TableFormat, delimiter: char, write: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn ReviewSink) -> Result<T>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    let value = {
        let writer = BufWriter::new(temp.as_file_mut());
        let mut sink: Box<dyn ReviewSink + '_> = match format {
            TableFormat::Csv => Box::new(CsvReviewSink::new(writer, delimiter)),
            TableFormat::Jsonl => Box::new(JsonlReviewSink::new(writer)),
        };
        let value = write(sink.as_mut())?;
        sink.finish()?;
        value
    };

    temp.persist(path).map_err(|e| ReviewSenseError::Io(e.error))?;
    log::debug!("wrote {}", path.display());
    Ok(value)
}

/// Read every record of an enriched file.
pub fn read_enriched<P: AsRef<Path>>(
    path: P,
    format: TableFormat,
    delimiter: char,
) -> Result<Vec<EnrichedReview>> {
    let file = File::open(path.as_ref())?;
    match format {
        TableFormat::Csv => self::csv::read_enriched(file, delimiter),
        TableFormat::Jsonl => self::jsonl::read_enriched(file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(TableFormat::from_path("reviews.csv").unwrap(), TableFormat::Csv);
        assert_eq!(TableFormat::from_path("REVIEWS.CSV").unwrap(), TableFormat::Csv);
        assert_eq!(TableFormat::from_path("a/b.jsonl").unwrap(), TableFormat::Jsonl);
        assert_eq!(TableFormat::from_path("a/b.ndjson").unwrap(), TableFormat::Jsonl);
        assert!(TableFormat::from_path("reviews.parquet").is_err());
        assert!(TableFormat::from_path("reviews").is_err());
    }

    fn record(id: &str) -> EnrichedReview {
        EnrichedReview::new(Review::new(5, "fine").with_id(id), 5, 0.6)
    }

    #[test]
    fn test_write_atomic_replaces_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        std::fs::write(&path, "old contents\n").unwrap();

        let written = write_atomic(&path, TableFormat::Jsonl, ',', |sink| {
            sink.write_all(&[record("R1"), record("R2")])?;
            Ok(2)
        })
        .unwrap();
        assert_eq!(written, 2);

        let records = read_enriched(&path, TableFormat::Jsonl, ',').unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_leaves_target_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("existing.csv");
        std::fs::write(&existing, "old contents\n").unwrap();
        let fresh = dir.path().join("fresh.csv");

        for path in [&existing, &fresh] {
            let result: Result<()> = write_atomic(path, TableFormat::Csv, ',', |sink| {
                sink.write(&record("R1"))?;
                Err(ReviewSenseError::record(2, "missing Rating"))
            });
            assert!(result.is_err());
        }

        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "old contents\n");
        assert!(!fresh.exists());
        // no temporary files left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
