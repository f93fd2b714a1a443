//! Text analysis for review scoring.
//!
//! Splits review text into tokens the lexicon scorer can consume. Unlike a
//! search analyzer, nothing here lowercases or drops tokens: capitalization,
//! emoticons and punctuation runs all carry sentiment.

pub mod analyzer;
pub mod token;
pub mod tokenizer;
