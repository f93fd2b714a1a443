//! Token types for text analysis.
//!
//! # Examples
//!
//! ```
//! use reviewsense::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("GREAT", 1, 6, 11);
//! assert_eq!(token.text, "GREAT");
//! assert_eq!(token.token_type, TokenType::Word);
//! assert!(token.is_all_caps());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of review text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token, case preserved
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// What kind of text the token holds
    pub token_type: TokenType,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Letters, digits and in-word apostrophes
    Word,
    /// Emoticons such as `:)` or `:-(`
    Emoticon,
    /// Runs of `!` or `?`
    Punctuation,
}

impl TokenType {
    /// Infer the token type from its text.
    pub fn infer(text: &str) -> Self {
        if text.chars().any(char::is_alphanumeric) && !text.starts_with([':', ';', '=']) {
            TokenType::Word
        } else if !text.is_empty() && text.chars().all(|c| c == '!' || c == '?') {
            TokenType::Punctuation
        } else {
            TokenType::Emoticon
        }
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            token_type: TokenType::infer(&text),
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a new token with explicit offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        let text = text.into();
        Token {
            token_type: TokenType::infer(&text),
            text,
            position,
            start_offset,
            end_offset,
        }
    }

    /// Lowercased form, used for lexicon lookups.
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }

    /// Whether this token is a word written entirely in uppercase.
    ///
    /// Single letters ("I", "A") do not count as shouting.
    pub fn is_all_caps(&self) -> bool {
        let mut letters = self.text.chars().filter(|c| c.is_alphabetic()).peekable();
        if letters.peek().is_none() {
            return false;
        }
        let mut count = 0;
        for c in letters {
            if !c.is_uppercase() {
                return false;
            }
            count += 1;
        }
        count > 1
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
