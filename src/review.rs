//! Review records before and after enrichment.
//!
//! Field names on the wire match the columns of the `fact_customer_reviews`
//! table the records come from (`ReviewID`, `Rating`, `ReviewText`, ...), so
//! enriched output lines up with the source table plus three new columns.

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::sentiment::{SentimentBucket, SentimentCategory, bucketize, classify};

/// A customer review as read from the source table.
///
/// Text columns keep the source cell verbatim; nothing is trimmed or
/// reformatted on the way through.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewID", default)]
    pub review_id: String,

    #[serde(rename = "CustomerID", default)]
    pub customer_id: String,

    #[serde(rename = "ProductID", default)]
    pub product_id: String,

    #[serde(rename = "ReviewDate", default)]
    pub review_date: String,

    /// Star rating, conventionally 1..=5. `None` when the column is empty or null.
    ///
    /// Whole-number floats such as `4.0` are accepted; `4.5` is an error.
    #[serde(rename = "Rating", default, deserialize_with = "rating_field")]
    pub rating: Option<i64>,

    #[serde(rename = "ReviewText", default)]
    pub review_text: String,
}

impl Review {
    /// Create a review with only the fields the enrichment reads.
    pub fn new<S: Into<String>>(rating: i64, review_text: S) -> Self {
        Review {
            rating: Some(rating),
            review_text: review_text.into(),
            ..Default::default()
        }
    }

    /// Set the review identifier.
    pub fn with_id<S: Into<String>>(mut self, review_id: S) -> Self {
        self.review_id = review_id.into();
        self
    }

    /// Build a review from a parsed JSON object.
    ///
    /// JSON exports often write identifiers as numbers; text columns holding
    /// a number or boolean take its JSON spelling, and `null` reads as empty.
    pub fn from_json(mut value: serde_json::Value) -> serde_json::Result<Self> {
        if let serde_json::Value::Object(map) = &mut value {
            for column in Self::TEXT_COLUMNS {
                match map.get(column) {
                    Some(serde_json::Value::Number(n)) => {
                        let text = n.to_string();
                        map.insert(column.to_string(), serde_json::Value::String(text));
                    }
                    Some(serde_json::Value::Bool(b)) => {
                        let text = b.to_string();
                        map.insert(column.to_string(), serde_json::Value::String(text));
                    }
                    Some(serde_json::Value::Null) => {
                        map.remove(column);
                    }
                    _ => {}
                }
            }
        }
        serde_json::from_value(value)
    }

    /// Columns passed through as text.
    const TEXT_COLUMNS: [&'static str; 5] =
        ["ReviewID", "CustomerID", "ProductID", "ReviewDate", "ReviewText"];
}

/// A review with its derived sentiment columns.
///
/// Flat on purpose: CSV rows cannot hold nested records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedReview {
    #[serde(rename = "ReviewID", default)]
    pub review_id: String,

    #[serde(rename = "CustomerID", default)]
    pub customer_id: String,

    #[serde(rename = "ProductID", default)]
    pub product_id: String,

    #[serde(rename = "ReviewDate", default)]
    pub review_date: String,

    /// The rating the category was derived from.
    #[serde(rename = "Rating")]
    pub rating: i64,

    #[serde(rename = "ReviewText", default)]
    pub review_text: String,

    #[serde(rename = "SentimentScore")]
    pub sentiment_score: f64,

    #[serde(rename = "SentimentCategory")]
    pub sentiment_category: SentimentCategory,

    #[serde(rename = "SentimentBucket")]
    pub sentiment_bucket: SentimentBucket,
}

impl EnrichedReview {
    /// Column order of enriched output.
    pub const COLUMNS: [&'static str; 9] = [
        "ReviewID",
        "CustomerID",
        "ProductID",
        "ReviewDate",
        "Rating",
        "ReviewText",
        "SentimentScore",
        "SentimentCategory",
        "SentimentBucket",
    ];

    /// Derive the sentiment columns for `review` from its polarity `score`.
    ///
    /// `rating` is the rating to classify with; it is passed separately so
    /// a missing source rating can be replaced by a configured default.
    pub fn new(review: Review, rating: i64, score: f64) -> Self {
        EnrichedReview {
            review_id: review.review_id,
            customer_id: review.customer_id,
            product_id: review.product_id,
            review_date: review.review_date,
            rating,
            review_text: review.review_text,
            sentiment_score: score,
            sentiment_category: classify(score, rating),
            sentiment_bucket: bucketize(score),
        }
    }
}

/// Ratings arrive as integers, as whole-number floats from exports of
/// tables with nulls, or as text.
fn rating_field<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(RatingVisitor)
}

struct RatingVisitor;

impl<'de> Visitor<'de> for RatingVisitor {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a whole-number rating")
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        i64::try_from(v)
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(Some(v as i64))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        let v = v.trim();
        if v.is_empty() {
            return Ok(None);
        }
        if let Ok(n) = v.parse::<i64>() {
            return Ok(Some(n));
        }
        match v.parse::<f64>() {
            Ok(f) => self.visit_f64(f),
            Err(_) => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}
