//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the complete text-processing step in front of a
//! scorer: raw review text in, token stream out.
//!
//! ```text
//! Review Text → Analyzer → Token Stream → LexiconScorer
//!                  ↓
//!              Tokenizer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// `Send + Sync` so one analyzer can serve every enrichment worker thread.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
