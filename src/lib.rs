//! # reviewsense
//!
//! Sentiment enrichment for customer product reviews.
//!
//! Each review gets three derived columns:
//!
//! - a polarity score in [-1, 1] computed from the review text
//! - a sentiment category reconciling that score with the star rating
//! - a coarse score bucket for histograms
//!
//! The reconciliation ([`sentiment::classify`]) and discretization
//! ([`sentiment::bucketize`]) are pure functions; [`enrich::Enricher`] drives
//! them over whole tables read from and written to CSV or JSONL.
//!
//! ```
//! use reviewsense::sentiment::{bucketize, classify, SentimentBucket, SentimentCategory};
//!
//! assert_eq!(classify(0.7, 1), SentimentCategory::MixedNegative);
//! assert_eq!(bucketize(0.7), SentimentBucket::StronglyPositive);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod review;
pub mod scoring;
pub mod sentiment;
pub mod table;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
