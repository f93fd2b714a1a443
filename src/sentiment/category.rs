//! Polarity classifier: text polarity x star rating.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewSenseError};

/// Half-width of the neutral band around zero.
///
/// Scores strictly above `NEUTRAL_BAND` count as positive text, scores
/// strictly below `-NEUTRAL_BAND` as negative text; the closed interval
/// between them is neutral.
pub const NEUTRAL_BAND: f64 = 0.05;

/// Sentiment category derived from a polarity score and a rating.
///
/// The `Mixed*` variants mark records where text and rating disagree in
/// direction; the suffix follows the rating when the text is polar and the
/// text when the rating is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentCategory {
    #[serde(rename = "Positive")]
    Positive,
    #[serde(rename = "Mixed Positive")]
    MixedPositive,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Mixed Negative")]
    MixedNegative,
    #[serde(rename = "Negative")]
    Negative,
}

impl SentimentCategory {
    /// Every category, from most positive to most negative.
    pub const ALL: [SentimentCategory; 5] = [
        SentimentCategory::Positive,
        SentimentCategory::MixedPositive,
        SentimentCategory::Neutral,
        SentimentCategory::MixedNegative,
        SentimentCategory::Negative,
    ];

    /// The label persisted in the `SentimentCategory` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::MixedPositive => "Mixed Positive",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::MixedNegative => "Mixed Negative",
            SentimentCategory::Negative => "Negative",
        }
    }

    /// Whether text and rating disagreed for this category.
    pub fn is_mixed(&self) -> bool {
        matches!(
            self,
            SentimentCategory::MixedPositive | SentimentCategory::MixedNegative
        )
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentCategory {
    type Err = ReviewSenseError;

    fn from_str(s: &str) -> Result<Self> {
        SentimentCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s.trim())
            .ok_or_else(|| ReviewSenseError::invalid_argument(format!("unknown sentiment category '{s}'")))
    }
}

/// Classify a review from its text polarity `score` and star `rating`.
///
/// | score            | rating | result         |
/// |------------------|--------|----------------|
/// | `> 0.05`         | `>= 4` | Positive       |
/// | `> 0.05`         | `== 3` | Mixed Positive |
/// | `> 0.05`         | else   | Mixed Negative |
/// | `< -0.05`        | `<= 2` | Negative       |
/// | `< -0.05`        | `== 3` | Mixed Negative |
/// | `< -0.05`        | else   | Mixed Positive |
/// | `[-0.05, 0.05]`  | `>= 4` | Positive       |
/// | `[-0.05, 0.05]`  | `<= 2` | Negative       |
/// | `[-0.05, 0.05]`  | else   | Neutral        |
///
/// Neither input is range checked. A NaN score fails both polar comparisons
/// and is treated as neutral text.
pub fn classify(score: f64, rating: i64) -> SentimentCategory {
    if score > NEUTRAL_BAND {
        match rating {
            r if r >= 4 => SentimentCategory::Positive,
            3 => SentimentCategory::MixedPositive,
            _ => SentimentCategory::MixedNegative,
        }
    } else if score < -NEUTRAL_BAND {
        match rating {
            r if r <= 2 => SentimentCategory::Negative,
            3 => SentimentCategory::MixedNegative,
            _ => SentimentCategory::MixedPositive,
        }
    } else {
        match rating {
            r if r >= 4 => SentimentCategory::Positive,
            r if r <= 2 => SentimentCategory::Negative,
            _ => SentimentCategory::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIVE_SCORES: [f64; 5] = [0.050001, 0.06, 0.3, 0.99, 1.0];
    const NEGATIVE_SCORES: [f64; 5] = [-0.050001, -0.06, -0.3, -0.99, -1.0];
    const NEUTRAL_SCORES: [f64; 5] = [-0.05, -0.01, 0.0, 0.01, 0.05];

    #[test]
    fn test_positive_text() {
        for score in POSITIVE_SCORES {
            assert_eq!(classify(score, 4), SentimentCategory::Positive);
            assert_eq!(classify(score, 5), SentimentCategory::Positive);
            assert_eq!(classify(score, 3), SentimentCategory::MixedPositive);
            assert_eq!(classify(score, 2), SentimentCategory::MixedNegative);
            assert_eq!(classify(score, 1), SentimentCategory::MixedNegative);
        }
    }

    #[test]
    fn test_negative_text() {
        for score in NEGATIVE_SCORES {
            assert_eq!(classify(score, 1), SentimentCategory::Negative);
            assert_eq!(classify(score, 2), SentimentCategory::Negative);
            assert_eq!(classify(score, 3), SentimentCategory::MixedNegative);
            assert_eq!(classify(score, 4), SentimentCategory::MixedPositive);
            assert_eq!(classify(score, 5), SentimentCategory::MixedPositive);
        }
    }

    #[test]
    fn test_neutral_text() {
        for score in NEUTRAL_SCORES {
            assert_eq!(classify(score, 5), SentimentCategory::Positive);
            assert_eq!(classify(score, 4), SentimentCategory::Positive);
            assert_eq!(classify(score, 3), SentimentCategory::Neutral);
            assert_eq!(classify(score, 2), SentimentCategory::Negative);
            assert_eq!(classify(score, 1), SentimentCategory::Negative);
        }
    }

    #[test]
    fn test_band_boundaries() {
        // 0.05 itself is neutral text, so the rating decides
        assert_eq!(classify(0.05, 4), SentimentCategory::Positive);
        assert_eq!(classify(0.05, 3), SentimentCategory::Neutral);
        assert_eq!(classify(0.06, 4), SentimentCategory::Positive);
        assert_eq!(classify(0.06, 3), SentimentCategory::MixedPositive);
        assert_eq!(classify(-0.05, 3), SentimentCategory::Neutral);
        assert_eq!(classify(-0.06, 3), SentimentCategory::MixedNegative);
    }

    #[test]
    fn test_out_of_domain_ratings_fall_through() {
        // High ratings satisfy >= 4, low ones <= 2; nothing is rejected
        assert_eq!(classify(0.5, 0), SentimentCategory::MixedNegative);
        assert_eq!(classify(0.5, 6), SentimentCategory::Positive);
        assert_eq!(classify(-0.5, 6), SentimentCategory::MixedPositive);
        assert_eq!(classify(-0.5, -3), SentimentCategory::Negative);
        assert_eq!(classify(0.0, 0), SentimentCategory::Negative);
        assert_eq!(classify(0.0, 99), SentimentCategory::Positive);
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(classify(7.5, 5), SentimentCategory::Positive);
        assert_eq!(classify(-7.5, 1), SentimentCategory::Negative);
        assert_eq!(classify(f64::INFINITY, 3), SentimentCategory::MixedPositive);
        assert_eq!(classify(f64::NEG_INFINITY, 3), SentimentCategory::MixedNegative);
        assert_eq!(classify(f64::NAN, 3), SentimentCategory::Neutral);
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for category in SentimentCategory::ALL {
            assert_eq!(category.as_str().parse::<SentimentCategory>().unwrap(), category);
        }
        assert!("Somewhat Positive".parse::<SentimentCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&SentimentCategory::MixedNegative).unwrap();
        assert_eq!(json, "\"Mixed Negative\"");
        assert!(SentimentCategory::MixedNegative.is_mixed());
        assert!(!SentimentCategory::Neutral.is_mixed());
    }
}
