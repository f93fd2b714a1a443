//! Polarity scoring: review text in, score in `[-1, 1]` out.
//!
//! The enrichment pipeline only depends on the [`PolarityScorer`] trait.
//! [`LexiconScorer`] is the built-in implementation, a rule-based scorer in
//! the style of VADER; [`FixedScorer`] returns a constant and is used when
//! scores come from elsewhere.

pub mod fixed;
pub mod lexicon;
pub mod lexicon_scorer;
pub mod scorer;

pub use fixed::FixedScorer;
pub use lexicon::SentimentLexicon;
pub use lexicon_scorer::{LexiconScorer, PolarityScores};
pub use scorer::PolarityScorer;
