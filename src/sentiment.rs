//! Sentiment reconciliation for review records.
//!
//! Two pure functions live here:
//!
//! - [`classify`] reconciles a text polarity score with a star rating into a
//!   [`SentimentCategory`], flagging disagreement between the two signals as
//!   one of the "Mixed" categories.
//! - [`bucketize`] discretizes a polarity score into one of four fixed
//!   [`SentimentBucket`] ranges for histogramming.
//!
//! Both are total over their input types: scores outside `[-1, 1]` and
//! ratings outside `1..=5` fall through to the catch-all branches instead of
//! being rejected.
//!
//! # Examples
//!
//! ```
//! use reviewsense::sentiment::{bucketize, classify, SentimentBucket, SentimentCategory};
//!
//! assert_eq!(classify(0.8, 5), SentimentCategory::Positive);
//! assert_eq!(classify(0.7, 1), SentimentCategory::MixedNegative);
//! assert_eq!(bucketize(0.8), SentimentBucket::StronglyPositive);
//! assert_eq!(bucketize(0.8).to_string(), "0.5 to 1.0");
//! ```

pub mod bucket;
pub mod category;

pub use bucket::{SentimentBucket, bucketize};
pub use category::{NEUTRAL_BAND, SentimentCategory, classify};
