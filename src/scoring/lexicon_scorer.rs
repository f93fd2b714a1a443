//! Rule-based lexicon scorer.
//!
//! Follows the VADER heuristics: each word contributes its lexicon valence,
//! adjusted by preceding boosters and negations, ALL-CAPS emphasis and a
//! contrastive "but"; punctuation emphasis is added to the sum, which is then
//! normalized into `[-1, 1]` as the compound score.
//!
//! # Examples
//!
//! ```
//! use reviewsense::scoring::{LexiconScorer, PolarityScorer};
//!
//! let scorer = LexiconScorer::new().unwrap();
//! assert!(scorer.score("Absolutely love it!").unwrap() > 0.5);
//! assert!(scorer.score("not good").unwrap() < 0.0);
//! assert_eq!(scorer.score("Arrived on Tuesday").unwrap(), 0.0);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, ReviewAnalyzer};
use crate::analysis::token::{Token, TokenType};
use crate::error::Result;
use crate::scoring::lexicon::SentimentLexicon;
use crate::scoring::scorer::PolarityScorer;

/// Valence added to an ALL-CAPS word when the text mixes case.
const CAPS_INCREMENT: f64 = 0.733;

/// Multiplier applied to a valence preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;

/// Emphasis per exclamation mark.
const EXCLAMATION_INCREMENT: f64 = 0.292;

/// At most this many exclamation marks add emphasis.
const MAX_EXCLAMATIONS: usize = 4;

/// Emphasis per question mark, when there are two or three.
const QUESTION_INCREMENT: f64 = 0.18;

/// Emphasis cap for four or more question marks.
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// Normalization constant of the compound score.
const ALPHA: f64 = 15.0;

/// How many preceding words can modify a valence.
const WINDOW: usize = 3;

/// Full breakdown of a scored text.
///
/// `positive`, `negative` and `neutral` are proportions of the text that
/// sum to 1 (or are all 0 for empty text); `compound` is the normalized
/// overall polarity used as the review's sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

impl PolarityScores {
    fn zero() -> Self {
        PolarityScores {
            positive: 0.0,
            negative: 0.0,
            neutral: 0.0,
            compound: 0.0,
        }
    }
}

/// Lexicon-driven polarity scorer.
#[derive(Clone)]
pub struct LexiconScorer {
    lexicon: Arc<SentimentLexicon>,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for LexiconScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconScorer")
            .field("lexicon_size", &self.lexicon.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl LexiconScorer {
    /// Create a scorer with the embedded default lexicon.
    pub fn new() -> Result<Self> {
        Self::with_lexicon(SentimentLexicon::default())
    }

    /// Create a scorer with a custom lexicon and the review analyzer.
    pub fn with_lexicon(lexicon: SentimentLexicon) -> Result<Self> {
        Ok(Self::with_analyzer(
            Arc::new(lexicon),
            Arc::new(ReviewAnalyzer::new()?),
        ))
    }

    /// Create a scorer with a custom lexicon and analyzer.
    pub fn with_analyzer(lexicon: Arc<SentimentLexicon>, analyzer: Arc<dyn Analyzer>) -> Self {
        LexiconScorer { lexicon, analyzer }
    }

    /// The lexicon this scorer looks words up in.
    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Score `text` and return the full positive/negative/neutral breakdown.
    pub fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        // Single characters carry no sentiment and would shift the window
        let words: Vec<Token> = self
            .analyzer
            .analyze(text)?
            .filter(|t| t.token_type != TokenType::Punctuation && t.text.chars().count() > 1)
            .collect();

        if words.is_empty() {
            return Ok(PolarityScores::zero());
        }

        let lowered: Vec<String> = words.iter().map(Token::normalized).collect();
        let caps_differential = caps_differential(&words);

        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| self.word_valence(&words, &lowered, i, caps_differential))
            .collect();

        apply_but_contrast(&lowered, &mut sentiments);

        let emphasis = punctuation_emphasis(text);
        Ok(sift(&sentiments, emphasis))
    }

    fn word_valence(
        &self,
        words: &[Token],
        lowered: &[String],
        i: usize,
        caps_differential: bool,
    ) -> f64 {
        let word = lowered[i].as_str();
        if self.lexicon.booster(word).is_some() {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(word) else {
            return 0.0;
        };

        if caps_differential && words[i].is_all_caps() {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=WINDOW.min(i) {
            let preceding = lowered[i - distance].as_str();
            if self.lexicon.contains(preceding) {
                continue;
            }

            let mut scalar = self.booster_scalar(&words[i - distance], preceding, valence, caps_differential);
            // boosters further away count for less
            match distance {
                2 => scalar *= 0.95,
                3 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            valence = self.negate(lowered, i, distance, valence);
        }

        valence
    }

    fn booster_scalar(&self, token: &Token, word: &str, valence: f64, caps_differential: bool) -> f64 {
        let Some(mut scalar) = self.lexicon.booster(word) else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar = -scalar;
        }
        if caps_differential && token.is_all_caps() {
            if valence > 0.0 {
                scalar += CAPS_INCREMENT;
            } else {
                scalar -= CAPS_INCREMENT;
            }
        }
        scalar
    }

    fn negate(&self, lowered: &[String], i: usize, distance: usize, valence: f64) -> f64 {
        let negator = lowered[i - distance].as_str();
        let between = &lowered[i - distance + 1..i];

        if distance > 1 && negator == "never" && between.iter().any(|w| w == "so" || w == "this") {
            // "never so good" reads as emphasis, not negation
            valence * 1.25
        } else if distance > 1 && negator == "without" && between.first().is_some_and(|w| w == "doubt") {
            valence
        } else if self.lexicon.is_negation(negator) {
            valence * NEGATION_SCALAR
        } else {
            valence
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self.polarity_scores(text)?.compound)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// True when some, but not all, words are written in ALL CAPS.
fn caps_differential(words: &[Token]) -> bool {
    let caps = words.iter().filter(|t| t.is_all_caps()).count();
    caps > 0 && caps < words.len()
}

/// Everything before "but" is damped, everything after it amplified.
fn apply_but_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but {
            *sentiment *= 0.5;
        } else if i > but {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn sift(sentiments: &[f64], emphasis: f64) -> PolarityScores {
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut positive: f64 = sentiments.iter().filter(|s| **s > 0.0).map(|s| s + 1.0).sum();
    let mut negative: f64 = sentiments.iter().filter(|s| **s < 0.0).map(|s| s - 1.0).sum();
    let neutral = sentiments.iter().filter(|s| **s == 0.0).count() as f64;

    if positive > negative.abs() {
        positive += emphasis;
    } else if positive < negative.abs() {
        negative -= emphasis;
    }

    let total = positive + negative.abs() + neutral;
    if total == 0.0 {
        return PolarityScores::zero();
    }

    PolarityScores {
        positive: (positive / total).abs(),
        negative: (negative / total).abs(),
        neutral: (neutral / total).abs(),
        compound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> LexiconScorer {
        LexiconScorer::new().unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_single_word() {
        // 1.9 / sqrt(1.9^2 + 15)
        assert_close(scorer().score("good").unwrap(), 0.4404);
        assert_close(scorer().score("bad").unwrap(), -0.5423);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert_close(scorer().score("not good").unwrap(), -0.3412);
        assert!(scorer().score("It doesn't work well").unwrap() < 0.0);
        assert!(scorer().score("not bad at all").unwrap() > 0.0);
    }

    #[test]
    fn test_typographic_contraction_negates() {
        let s = scorer();
        let curly = s.score("I don’t like it").unwrap();
        assert!(curly < 0.0);
        assert_close(curly, s.score("I don't like it").unwrap());
    }

    #[test]
    fn test_boosters() {
        let s = scorer();
        assert_close(s.score("very good").unwrap(), 0.4927);
        assert!(s.score("slightly good").unwrap() < s.score("good").unwrap());
        assert!(s.score("extremely bad").unwrap() < s.score("bad").unwrap());
    }

    #[test]
    fn test_caps_emphasis_needs_mixed_case() {
        let s = scorer();
        let shouted = s.score("GOOD product").unwrap();
        let plain = s.score("good product").unwrap();
        assert!(shouted > plain);

        // every word capitalized: no differential
        assert_close(s.score("GOOD PRODUCT").unwrap(), plain);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let s = scorer();
        let calm = s.score("good").unwrap();
        let excited = s.score("good!!!").unwrap();
        let capped = s.score("good!!!!!!!!").unwrap();
        assert!(excited > calm);
        assert!(capped > excited);
        assert_close(capped, s.score("good!!!!").unwrap());
        // emphasis never changes direction of neutral text
        assert_eq!(s.score("Arrived!!!").unwrap(), 0.0);
    }

    #[test]
    fn test_but_shifts_weight() {
        let s = scorer();
        assert!(s.score("good but terrible").unwrap() < 0.0);
        assert!(s.score("terrible but good").unwrap() > 0.0);
    }

    #[test]
    fn test_emoticons() {
        let s = scorer();
        assert!(s.score("Arrived late :(").unwrap() < 0.0);
        assert!(s.score("Works :)").unwrap() > 0.0);
    }

    #[test]
    fn test_empty_and_unknown_text() {
        let s = scorer();
        assert_eq!(s.score("").unwrap(), 0.0);
        assert_eq!(s.score("   ").unwrap(), 0.0);
        assert_eq!(s.score("The box contains a cable").unwrap(), 0.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let s = scorer();
        let text = "BEST best AMAZING amazing perfect love love love great great!!!!";
        let score = s.score(text).unwrap();
        assert!(score <= 1.0 && score > 0.9);

        let text = "WORST worst HATE hate terrible awful horrible useless junk!!!!";
        let score = s.score(text).unwrap();
        assert!(score >= -1.0 && score < -0.9);
    }

    #[test]
    fn test_polarity_proportions() {
        let scores = scorer().polarity_scores("good product, bad box").unwrap();
        assert!(scores.positive > 0.0);
        assert!(scores.negative > 0.0);
        assert!(scores.neutral > 0.0);
        assert_close(scores.positive + scores.negative + scores.neutral, 1.0);

        let empty = scorer().polarity_scores("").unwrap();
        assert_eq!(empty, PolarityScores::zero());
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = SentimentLexicon::empty();
        lexicon.insert("meh", -0.5);
        let scorer = LexiconScorer::with_lexicon(lexicon).unwrap();

        assert!(scorer.score("meh").unwrap() < 0.0);
        assert_eq!(scorer.score("good").unwrap(), 0.0);
    }
}
