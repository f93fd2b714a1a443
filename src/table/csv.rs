//! CSV review source and sink.
//!
//! The first row holds the column names:
//! ```csv
//! ReviewID,CustomerID,ProductID,ReviewDate,Rating,ReviewText
//! 1,77,18,2023-12-23,3,"Average experience, nothing special."
//! ```
//! Columns the records do not know are ignored; missing ones default to
//! empty. Only the header row is trimmed; cells pass through verbatim.

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use ::csv::{ReaderBuilder, Trim, Writer, WriterBuilder};

use crate::error::{Result, ReviewSenseError};
use crate::review::{EnrichedReview, Review};
use crate::table::{ReviewIter, ReviewSink, ReviewSource};

/// Reads reviews from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvReviewSource {
    path: PathBuf,
    /// CSV delimiter character (default: ',')
    delimiter: u8,
}

impl CsvReviewSource {
    /// Create a source for the CSV file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        CsvReviewSource {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter as u8;
        self
    }

    /// Iterate the reviews of any CSV reader.
    pub fn read_from<R: Read + Send + 'static>(&self, reader: R) -> ReviewIter {
        let reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::Headers)
            .from_reader(reader);

        Box::new(
            reader
                .into_deserialize::<Review>()
                .enumerate()
                .map(|(i, result)| {
                    result.map_err(|e| ReviewSenseError::record(i + 1, format!("invalid CSV row: {e}")))
                }),
        )
    }
}

impl ReviewSource for CsvReviewSource {
    fn reviews(&self) -> Result<ReviewIter> {
        let file = File::open(&self.path)?;
        Ok(self.read_from(file))
    }
}

/// Writes enriched reviews as CSV with a header row.
pub struct CsvReviewSink<W: Write> {
    writer: Writer<W>,
    written: usize,
    header_written: bool,
}

impl<W: Write> CsvReviewSink<W> {
    /// Create a sink writing to `writer`.
    pub fn new(writer: W, delimiter: char) -> Self {
        CsvReviewSink {
            writer: WriterBuilder::new()
                .delimiter(delimiter as u8)
                .from_writer(writer),
            written: 0,
            header_written: false,
        }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Finish writing and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.finish()?;
        self.writer
            .into_inner()
            .map_err(|e| ReviewSenseError::Io(e.into_error()))
    }
}

impl<W: Write> ReviewSink for CsvReviewSink<W> {
    fn write(&mut self, record: &EnrichedReview) -> Result<()> {
        self.writer.serialize(record)?;
        self.written += 1;
        self.header_written = true;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // serialize() only emits the header alongside the first record
        if !self.header_written {
            self.writer.write_record(EnrichedReview::COLUMNS)?;
            self.header_written = true;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Read back a file of enriched reviews, as written by [`CsvReviewSink`].
pub fn read_enriched<R: Read>(reader: R, delimiter: char) -> Result<Vec<EnrichedReview>> {
    ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .trim(Trim::Headers)
        .from_reader(reader)
        .into_deserialize::<EnrichedReview>()
        .enumerate()
        .map(|(i, result)| {
            result.map_err(|e| ReviewSenseError::record(i + 1, format!("invalid enriched row: {e}")))
        })
        .collect()
}
