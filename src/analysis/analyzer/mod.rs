//! Analyzers that turn review text into tokens.

mod analyzer;
mod review;

pub use analyzer::Analyzer;
pub use review::ReviewAnalyzer;
