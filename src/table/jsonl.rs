//! JSONL review source and sink.
//!
//! One JSON object per line:
//! ```jsonl
//! {"ReviewID": 1, "Rating": 3, "ReviewText": "Average experience, nothing special."}
//! {"ReviewID": 2, "Rating": 5, "ReviewText": "Great!"}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use crate::error::{Result, ReviewSenseError};
use crate::review::{EnrichedReview, Review};
use crate::table::{ReviewIter, ReviewSink, ReviewSource};

/// Reads reviews from a JSONL file. Blank lines are skipped.
#[derive(Debug, Clone)]
pub struct JsonlReviewSource {
    path: PathBuf,
}

impl JsonlReviewSource {
    /// Create a source for the JSONL file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonlReviewSource { path: path.into() }
    }

    /// Iterate the reviews of any JSONL reader.
    ///
    /// Rows are numbered by physical line, so blank lines still count.
    pub fn read_from<R: Read + Send + 'static>(&self, reader: R) -> ReviewIter {
        Box::new(
            BufReader::new(reader)
                .lines()
                .enumerate()
                .filter_map(|(i, line)| parse_line(i + 1, line)),
        )
    }
}

impl ReviewSource for JsonlReviewSource {
    fn reviews(&self) -> Result<ReviewIter> {
        let file = File::open(&self.path)?;
        Ok(self.read_from(file))
    }
}

fn parse_line(row: usize, line: std::io::Result<String>) -> Option<Result<Review>> {
    let line = match line {
        Ok(line) => line,
        Err(e) => return Some(Err(e.into())),
    };
    if line.trim().is_empty() {
        return None;
    }
    Some(
        serde_json::from_str(&line)
            .and_then(Review::from_json)
            .map_err(|e| ReviewSenseError::record(row, format!("Failed to parse JSON: {e}"))),
    )
}

/// Writes enriched reviews as one JSON object per line.
pub struct JsonlReviewSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonlReviewSink<W> {
    /// Create a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        JsonlReviewSink { writer }
    }

    /// Finish writing and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.finish()?;
        Ok(self.writer)
    }
}

impl<W: Write> ReviewSink for JsonlReviewSink<W> {
    fn write(&mut self, record: &EnrichedReview) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Read back a file of enriched reviews, as written by [`JsonlReviewSink`].
pub fn read_enriched<R: Read>(reader: R) -> Result<Vec<EnrichedReview>> {
    let mut records = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .map_err(|e| ReviewSenseError::record(i + 1, format!("Failed to parse JSON: {e}")))?;
        records.push(record);
    }
    Ok(records)
}
