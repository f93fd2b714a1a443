//! Analyzer tuned for product review text.
//!
//! # Examples
//!
//! ```
//! use reviewsense::analysis::analyzer::{Analyzer, ReviewAnalyzer};
//!
//! let analyzer = ReviewAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Love it!! :)").unwrap().collect();
//!
//! // Case, punctuation runs and emoticons are all kept
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "Love");
//! assert_eq!(tokens[1].text, "!!");
//! assert_eq!(tokens[2].text, ":)");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Tokenizes without filtering so the scorer sees the text as written.
#[derive(Clone)]
pub struct ReviewAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
}

impl ReviewAnalyzer {
    /// Create an analyzer backed by the default review [`RegexTokenizer`].
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(RegexTokenizer::new()?)))
    }

    /// Create an analyzer with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        ReviewAnalyzer { tokenizer }
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl Analyzer for ReviewAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.tokenizer.tokenize(text)
    }

    fn name(&self) -> &'static str {
        "review"
    }
}

impl std::fmt::Debug for ReviewAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}
