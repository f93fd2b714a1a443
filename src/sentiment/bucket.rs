//! Score bucketizer: four fixed half-open ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewSenseError};

/// Coarse polarity range used for histogramming.
///
/// The ranges are half-open and closed on their lower bound, except the
/// bottom bucket which absorbs everything below `-0.5`:
///
/// ```text
/// StronglyNegative   MildlyNegative    MildlyPositive    StronglyPositive
///  (-inf, -0.5)      [-0.5, 0.0)       [0.0, 0.5)        [0.5, +inf)
/// ```
///
/// The labels are kept exactly as persisted downstream, including the
/// "-0.49 to 0.0" label of a range that actually starts at -0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentBucket {
    #[serde(rename = "0.5 to 1.0")]
    StronglyPositive,
    #[serde(rename = "0.0 to 0.49")]
    MildlyPositive,
    #[serde(rename = "-0.49 to 0.0")]
    MildlyNegative,
    #[serde(rename = "-1.0 to -0.5")]
    StronglyNegative,
}

impl SentimentBucket {
    /// Every bucket, from the top of the score range down.
    pub const ALL: [SentimentBucket; 4] = [
        SentimentBucket::StronglyPositive,
        SentimentBucket::MildlyPositive,
        SentimentBucket::MildlyNegative,
        SentimentBucket::StronglyNegative,
    ];

    /// The label persisted in the `SentimentBucket` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBucket::StronglyPositive => "0.5 to 1.0",
            SentimentBucket::MildlyPositive => "0.0 to 0.49",
            SentimentBucket::MildlyNegative => "-0.49 to 0.0",
            SentimentBucket::StronglyNegative => "-1.0 to -0.5",
        }
    }

    /// Whether `score` falls into this bucket's range.
    ///
    /// Exactly one bucket contains any given score, NaN included.
    pub fn contains(&self, score: f64) -> bool {
        match self {
            SentimentBucket::StronglyPositive => score >= 0.5,
            SentimentBucket::MildlyPositive => (0.0..0.5).contains(&score),
            SentimentBucket::MildlyNegative => (-0.5..0.0).contains(&score),
            SentimentBucket::StronglyNegative => score < -0.5 || score.is_nan(),
        }
    }
}

impl fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentBucket {
    type Err = ReviewSenseError;

    fn from_str(s: &str) -> Result<Self> {
        SentimentBucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s.trim())
            .ok_or_else(|| ReviewSenseError::invalid_argument(format!("unknown sentiment bucket '{s}'")))
    }
}

/// Map a polarity score to its bucket. First match wins, top down.
pub fn bucketize(score: f64) -> SentimentBucket {
    if score >= 0.5 {
        SentimentBucket::StronglyPositive
    } else if score >= 0.0 {
        SentimentBucket::MildlyPositive
    } else if score >= -0.5 {
        SentimentBucket::MildlyNegative
    } else {
        SentimentBucket::StronglyNegative
    }
}
