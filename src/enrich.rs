//! The enrichment pipeline: score, classify and bucket every review.
//!
//! Each record is processed independently, so a batch can be enriched on a
//! thread pool without changing the output or its order.

pub mod enricher;
pub mod report;

pub use enricher::Enricher;
pub use report::EnrichmentReport;
