//! Constant-score scorer.

use crate::error::Result;
use crate::scoring::scorer::PolarityScorer;

/// A scorer that ignores the text and always returns the same score.
///
/// Useful when polarity was computed upstream, and in tests that need to
/// drive the classifier through a specific branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScorer {
    score: f64,
}

impl FixedScorer {
    /// Create a scorer that always returns `score`.
    pub fn new(score: f64) -> Self {
        FixedScorer { score }
    }
}

impl PolarityScorer for FixedScorer {
    fn score(&self, _text: &str) -> Result<f64> {
        Ok(self.score)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
