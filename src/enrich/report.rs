//! Summary statistics of an enrichment run.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::review::EnrichedReview;
use crate::sentiment::{SentimentBucket, SentimentCategory};

/// Counts and histograms over a set of enriched reviews.
///
/// Both histograms always hold every category and bucket, zero counts
/// included, in the fixed order of their enumerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentReport {
    /// Reviews read from the source.
    pub total_reviews: usize,
    /// Reviews enriched and written.
    pub enriched_reviews: usize,
    /// Reviews dropped for a missing rating.
    pub skipped_reviews: usize,
    /// Enriched reviews whose text and rating disagree.
    pub mixed_reviews: usize,
    /// Mean sentiment score of the enriched reviews.
    pub mean_score: f64,
    pub categories: BTreeMap<SentimentCategory, usize>,
    pub buckets: BTreeMap<SentimentBucket, usize>,
    pub duration_ms: u64,
    #[serde(skip)]
    score_sum: f64,
}

impl Default for EnrichmentReport {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrichmentReport {
    /// An empty report.
    pub fn new() -> Self {
        EnrichmentReport {
            total_reviews: 0,
            enriched_reviews: 0,
            skipped_reviews: 0,
            mixed_reviews: 0,
            mean_score: 0.0,
            categories: SentimentCategory::ALL.into_iter().map(|c| (c, 0)).collect(),
            buckets: SentimentBucket::ALL.into_iter().map(|b| (b, 0)).collect(),
            duration_ms: 0,
            score_sum: 0.0,
        }
    }

    /// Build a report over already enriched records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EnrichedReview>,
    {
        let mut report = Self::new();
        for record in records {
            report.total_reviews += 1;
            report.record(record);
        }
        report
    }

    /// Count one enriched record.
    pub fn record(&mut self, record: &EnrichedReview) {
        self.enriched_reviews += 1;
        if record.sentiment_category.is_mixed() {
            self.mixed_reviews += 1;
        }
        *self.categories.entry(record.sentiment_category).or_insert(0) += 1;
        *self.buckets.entry(record.sentiment_bucket).or_insert(0) += 1;

        self.score_sum += record.sentiment_score;
        self.mean_score = self.score_sum / self.enriched_reviews as f64;
    }

    /// Count one record dropped by the rating policy.
    pub fn skip(&mut self) {
        self.skipped_reviews += 1;
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: &EnrichmentReport) {
        self.total_reviews += other.total_reviews;
        self.enriched_reviews += other.enriched_reviews;
        self.skipped_reviews += other.skipped_reviews;
        self.mixed_reviews += other.mixed_reviews;
        for (category, count) in &other.categories {
            *self.categories.entry(*category).or_insert(0) += count;
        }
        for (bucket, count) in &other.buckets {
            *self.buckets.entry(*bucket).or_insert(0) += count;
        }
        self.score_sum += other.score_sum;
        self.mean_score = if self.enriched_reviews > 0 {
            self.score_sum / self.enriched_reviews as f64
        } else {
            0.0
        };
        self.duration_ms += other.duration_ms;
    }

    /// Record the wall-clock time of the run.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = duration.as_millis() as u64;
        self
    }

    /// Count for one category.
    pub fn category_count(&self, category: SentimentCategory) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    /// Count for one bucket.
    pub fn bucket_count(&self, bucket: SentimentBucket) -> usize {
        self.buckets.get(&bucket).copied().unwrap_or(0)
    }
}
