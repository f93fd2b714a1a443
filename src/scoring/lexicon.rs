//! Sentiment lexicon: word valences, negations and intensity boosters.
//!
//! Valences use the VADER scale, roughly `-4.0` (most negative) to `4.0`
//! (most positive). Keys are stored lowercased.
//!
//! A full VADER lexicon file can be loaded with [`SentimentLexicon::load`];
//! the embedded default covers common product review vocabulary.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ReviewSenseError};

/// Scalar added to a valence by a booster word.
pub const BOOST_INCREMENT: f64 = 0.293;

/// Scalar subtracted from a valence by a dampener word.
pub const BOOST_DECREMENT: f64 = -0.293;

const DEFAULT_VALENCES: &[(&str, f64)] = &[
    // positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("comfortable", 1.5),
    ("cool", 1.3),
    ("decent", 1.0),
    ("durable", 1.4),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressive", 2.3),
    ("impressed", 2.1),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("nice", 1.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("perfect", 2.7),
    ("perfectly", 2.4),
    ("pleased", 1.9),
    ("recommend", 1.5),
    ("recommended", 1.6),
    ("reliable", 1.6),
    ("satisfied", 1.8),
    ("sturdy", 1.2),
    ("superb", 3.1),
    ("thanks", 1.9),
    ("well", 1.1),
    ("wonderful", 2.7),
    ("worth", 0.9),
    // negative
    ("annoying", -1.7),
    ("avoid", -1.2),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broken", -1.9),
    ("defective", -1.9),
    ("difficult", -1.5),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("dislike", -1.6),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fails", -2.2),
    ("flimsy", -1.1),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("junk", -1.7),
    ("mediocre", -1.0),
    ("painful", -1.9),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("regret", -1.8),
    ("sad", -2.1),
    ("scam", -2.8),
    ("terrible", -2.1),
    ("ugly", -2.3),
    ("uncomfortable", -1.6),
    ("unhappy", -1.8),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    // emoticons
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.3),
    (";)", 0.9),
    ("=)", 1.6),
    (":(", -1.9),
    (":-(", -1.5),
    (":/", -1.4),
];

const DEFAULT_NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "despite", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neednt", "neither", "never", "none",
    "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "rarely", "seldom", "shant",
    "shouldnt", "uhuh", "wasnt", "werent", "without", "wont", "wouldnt",
];

const DEFAULT_BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCREMENT),
    ("amazingly", BOOST_INCREMENT),
    ("completely", BOOST_INCREMENT),
    ("deeply", BOOST_INCREMENT),
    ("especially", BOOST_INCREMENT),
    ("exceptionally", BOOST_INCREMENT),
    ("extremely", BOOST_INCREMENT),
    ("fully", BOOST_INCREMENT),
    ("greatly", BOOST_INCREMENT),
    ("highly", BOOST_INCREMENT),
    ("hugely", BOOST_INCREMENT),
    ("incredibly", BOOST_INCREMENT),
    ("more", BOOST_INCREMENT),
    ("most", BOOST_INCREMENT),
    ("particularly", BOOST_INCREMENT),
    ("really", BOOST_INCREMENT),
    ("so", BOOST_INCREMENT),
    ("super", BOOST_INCREMENT),
    ("totally", BOOST_INCREMENT),
    ("truly", BOOST_INCREMENT),
    ("very", BOOST_INCREMENT),
    ("almost", BOOST_DECREMENT),
    ("barely", BOOST_DECREMENT),
    ("hardly", BOOST_DECREMENT),
    ("less", BOOST_DECREMENT),
    ("little", BOOST_DECREMENT),
    ("marginally", BOOST_DECREMENT),
    ("occasionally", BOOST_DECREMENT),
    ("partly", BOOST_DECREMENT),
    ("slightly", BOOST_DECREMENT),
    ("somewhat", BOOST_DECREMENT),
];

/// Word valences plus the modifier vocabularies the scorer needs.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    /// Word to valence mapping
    valences: HashMap<String, f64>,
    /// Words that flip the polarity of what follows
    negations: HashSet<String>,
    /// Intensifiers (positive scalar) and dampeners (negative scalar)
    boosters: HashMap<String, f64>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        let mut lexicon = Self::empty();
        lexicon.extend(DEFAULT_VALENCES.iter().map(|(word, valence)| (*word, *valence)));
        lexicon
    }
}

impl SentimentLexicon {
    /// A lexicon with no valences but the default negations and boosters.
    pub fn empty() -> Self {
        SentimentLexicon {
            valences: HashMap::new(),
            negations: DEFAULT_NEGATIONS.iter().map(|w| w.to_string()).collect(),
            boosters: DEFAULT_BOOSTERS
                .iter()
                .map(|(w, s)| (w.to_string(), *s))
                .collect(),
        }
    }

    /// Load a VADER-format lexicon file.
    ///
    /// Each line is `token<TAB>mean_valence[<TAB>...]`; columns after the
    /// mean are ignored and blank lines are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ReviewSenseError::lexicon(format!("cannot open {}: {e}", path.display()))
        })?;
        let lexicon = Self::from_reader(BufReader::new(file))?;
        log::debug!("loaded {} lexicon entries from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Parse a VADER-format lexicon from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lexicon = Self::empty();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut columns = line.split('\t');
            let token = columns.next().unwrap_or_default().trim();
            let valence = columns.next().map(str::trim).ok_or_else(|| {
                ReviewSenseError::lexicon(format!("line {}: missing valence column", line_num + 1))
            })?;

            if token.is_empty() {
                return Err(ReviewSenseError::lexicon(format!(
                    "line {}: empty token",
                    line_num + 1
                )));
            }

            let valence = valence.parse::<f64>().map_err(|e| {
                ReviewSenseError::lexicon(format!(
                    "line {}: invalid valence '{valence}': {e}",
                    line_num + 1
                ))
            })?;

            lexicon.insert(token, valence);
        }

        Ok(lexicon)
    }

    /// Add or replace a word's valence.
    pub fn insert<S: AsRef<str>>(&mut self, word: S, valence: f64) {
        self.valences.insert(word.as_ref().to_lowercase(), valence);
    }

    /// Add or replace several valences.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (word, valence) in entries {
            self.insert(word, valence);
        }
    }

    /// Valence of a lowercased word, if it is in the lexicon.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Whether the lexicon has a valence for `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.valences.contains_key(word)
    }

    /// Whether a lowercased word negates what follows it.
    ///
    /// Any contraction ending in `n't` counts, as do the apostrophe-less
    /// spellings in the negation list.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't") || word.ends_with("n’t")
    }

    /// Booster scalar for a lowercased word, if it is an intensifier or dampener.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Number of words with a valence.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Whether the lexicon has no valences.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
