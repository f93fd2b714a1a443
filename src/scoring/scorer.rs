//! Polarity scorer trait.

use std::sync::Arc;

use crate::error::Result;

/// Trait for turning review text into a polarity score.
///
/// Implementations return a value in `[-1, 1]`, more negative meaning more
/// negative sentiment. The enrichment pipeline treats the scorer as a black
/// box and only consumes the number.
///
/// `Send + Sync` is required because one scorer is shared by every worker
/// thread of a parallel enrichment run.
///
/// # Custom implementation
///
/// ```
/// use reviewsense::error::Result;
/// use reviewsense::scoring::PolarityScorer;
///
/// struct ExclamationScorer;
///
/// impl PolarityScorer for ExclamationScorer {
///     fn score(&self, text: &str) -> Result<f64> {
///         Ok(if text.ends_with('!') { 0.5 } else { 0.0 })
///     }
///
///     fn name(&self) -> &str {
///         "exclamation"
///     }
/// }
///
/// assert_eq!(ExclamationScorer.score("Wow!").unwrap(), 0.5);
/// ```
pub trait PolarityScorer: Send + Sync {
    /// Score the given text.
    fn score(&self, text: &str) -> Result<f64>;

    /// Get the name of this scorer (for logging and reports).
    fn name(&self) -> &str;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Arc<T> {
    fn score(&self, text: &str) -> Result<f64> {
        (**self).score(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Box<T> {
    fn score(&self, text: &str) -> Result<f64> {
        (**self).score(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
