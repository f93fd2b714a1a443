//! Per-record enrichment and the batch driver around it.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::{EnrichConfig, RatingPolicy};
use crate::enrich::report::EnrichmentReport;
use crate::error::{Result, ReviewSenseError};
use crate::review::{EnrichedReview, Review};
use crate::scoring::PolarityScorer;
use crate::table::{ReviewSink, ReviewSource};

/// Scores, classifies and buckets reviews.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use reviewsense::config::EnrichConfig;
/// use reviewsense::enrich::Enricher;
/// use reviewsense::review::Review;
/// use reviewsense::scoring::LexiconScorer;
/// use reviewsense::sentiment::SentimentCategory;
///
/// let scorer = Arc::new(LexiconScorer::new().unwrap());
/// let enricher = Enricher::new(scorer, EnrichConfig::default()).unwrap();
///
/// let (records, report) = enricher
///     .enrich_all(vec![Review::new(5, "Great product, love it")])
///     .unwrap();
///
/// assert_eq!(records[0].sentiment_category, SentimentCategory::Positive);
/// assert_eq!(report.enriched_reviews, 1);
/// ```
pub struct Enricher {
    scorer: Arc<dyn PolarityScorer>,
    config: EnrichConfig,
    /// Worker pool for parallel batches; None for sequential runs.
    thread_pool: Option<ThreadPool>,
}

impl std::fmt::Debug for Enricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher")
            .field("scorer", &self.scorer.name())
            .field("config", &self.config)
            .field(
                "threads",
                &self.thread_pool.as_ref().map(|p| p.current_num_threads()),
            )
            .finish()
    }
}

impl Enricher {
    /// Create an enricher. Builds a dedicated thread pool when the
    /// configuration asks for parallel batches.
    pub fn new(scorer: Arc<dyn PolarityScorer>, config: EnrichConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool = if config.parallel {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.thread_count())
                .thread_name(|i| format!("enrich-{i}"))
                .build()
                .map_err(|e| {
                    ReviewSenseError::internal(format!("Failed to create thread pool: {e}"))
                })?;
            Some(pool)
        } else {
            None
        };

        Ok(Enricher {
            scorer,
            config,
            thread_pool,
        })
    }

    /// The configuration this enricher runs with.
    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Enrich a single review.
    ///
    /// `row` is the 1-based position of the review in its source and only
    /// appears in errors. Returns `Ok(None)` when the review has no rating
    /// and the policy is [`RatingPolicy::Skip`].
    pub fn enrich_one(&self, row: usize, review: Review) -> Result<Option<EnrichedReview>> {
        let rating = match (review.rating, self.config.rating_policy) {
            (Some(rating), _) => rating,
            (None, RatingPolicy::Default(rating)) => rating,
            (None, RatingPolicy::Skip) => return Ok(None),
            (None, RatingPolicy::Reject) => {
                return Err(ReviewSenseError::record(
                    row,
                    format!("review '{}' has no Rating", review.review_id),
                ));
            }
        };

        let score = self.scorer.score(&review.review_text).map_err(|e| {
            ReviewSenseError::record(row, format!("scoring review '{}' failed: {e}", review.review_id))
        })?;

        Ok(Some(EnrichedReview::new(review, rating, score)))
    }

    /// Enrich a batch of reviews, preserving their order.
    ///
    /// Rows in errors are numbered from `first_row`.
    pub fn enrich_batch(
        &self,
        first_row: usize,
        reviews: Vec<Review>,
    ) -> Result<(Vec<EnrichedReview>, EnrichmentReport)> {
        let total = reviews.len();
        let enrich = |(i, review): (usize, Review)| self.enrich_one(first_row + i, review);

        let results: Vec<Option<EnrichedReview>> = match &self.thread_pool {
            Some(pool) => pool.install(|| {
                reviews
                    .into_par_iter()
                    .enumerate()
                    .map(enrich)
                    .collect::<Result<Vec<_>>>()
            })?,
            None => reviews
                .into_iter()
                .enumerate()
                .map(enrich)
                .collect::<Result<Vec<_>>>()?,
        };

        let mut report = EnrichmentReport::new();
        report.total_reviews = total;

        let mut records = Vec::with_capacity(results.len());
        for (i, result) in results.into_iter().enumerate() {
            match result {
                Some(record) => {
                    report.record(&record);
                    records.push(record);
                }
                None => {
                    log::warn!("skipping row {}: missing rating", first_row + i);
                    report.skip();
                }
            }
        }

        Ok((records, report))
    }

    /// Enrich an in-memory set of reviews as one batch.
    pub fn enrich_all(&self, reviews: Vec<Review>) -> Result<(Vec<EnrichedReview>, EnrichmentReport)> {
        let start = Instant::now();
        let (records, report) = self.enrich_batch(1, reviews)?;
        Ok((records, report.with_duration(start.elapsed())))
    }

    /// Stream every review from `source` through enrichment into `sink`.
    ///
    /// Reviews are read and written in batches of `batch_size`, so memory
    /// stays bounded regardless of the source size. The sink is finished
    /// before returning.
    pub fn run(&self, source: &dyn ReviewSource, sink: &mut dyn ReviewSink) -> Result<EnrichmentReport> {
        let start = Instant::now();
        log::info!(
            "enriching reviews with the {} scorer ({})",
            self.scorer.name(),
            match &self.thread_pool {
                Some(pool) => format!("{} threads", pool.current_num_threads()),
                None => "sequential".to_string(),
            }
        );

        let mut report = EnrichmentReport::new();
        let mut reviews = source.reviews()?;
        let mut next_row = 1;

        loop {
            let batch = reviews
                .by_ref()
                .take(self.config.batch_size)
                .collect::<Result<Vec<Review>>>()?;
            if batch.is_empty() {
                break;
            }

            let batch_len = batch.len();
            let (records, batch_report) = self.enrich_batch(next_row, batch)?;
            sink.write_all(&records)?;
            report.merge(&batch_report);

            log::debug!(
                "rows {}..{}: {} enriched, {} skipped",
                next_row,
                next_row + batch_len - 1,
                batch_report.enriched_reviews,
                batch_report.skipped_reviews
            );
            next_row += batch_len;
        }

        sink.finish()?;

        let report = report.with_duration(start.elapsed());
        log::info!(
            "enriched {} of {} reviews in {} ms ({} skipped, {} mixed)",
            report.enriched_reviews,
            report.total_reviews,
            report.duration_ms,
            report.skipped_reviews,
            report.mixed_reviews
        );
        Ok(report)
    }
}
