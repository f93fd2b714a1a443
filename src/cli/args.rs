//! Command line argument parsing for the reviewsense CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{EnrichConfig, RatingPolicy};
use crate::error::{Result, ReviewSenseError};
use crate::table::TableFormat;

/// reviewsense - sentiment enrichment for customer review tables
#[derive(Parser, Debug, Clone)]
#[command(name = "reviewsense")]
#[command(about = "Derive sentiment score, category and bucket columns for customer reviews")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ReviewSenseArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ReviewSenseArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Enrich a review table with sentiment columns
    Enrich(EnrichArgs),

    /// Classify a single score and rating
    Classify(ClassifyArgs),

    /// Score a piece of review text
    Score(ScoreArgs),

    /// Show the sentiment histogram of an enriched table
    Stats(StatsArgs),
}

/// Arguments for enriching a review table
#[derive(Parser, Debug, Clone)]
pub struct EnrichArgs {
    /// Review table to read (CSV or JSONL)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Enriched table to write (CSV or JSONL)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// VADER-format lexicon file replacing the built-in lexicon
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE", env = "REVIEWSENSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Input format (default: from the file extension)
    #[arg(long = "input-format")]
    pub input_type: Option<TableFormat>,

    /// Output format (default: from the file extension)
    #[arg(long = "output-format")]
    pub output_type: Option<TableFormat>,

    /// Enrich on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Number of worker threads
    #[arg(short, long, conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Reviews per batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// What to do with reviews that have no rating
    #[arg(long)]
    pub on_missing_rating: Option<MissingRating>,

    /// Rating used for reviews without one (implies --on-missing-rating default)
    #[arg(long, allow_hyphen_values = true)]
    pub default_rating: Option<i64>,

    /// CSV field delimiter
    #[arg(short, long)]
    pub delimiter: Option<char>,
}

impl EnrichArgs {
    /// Build the run configuration: config file (or defaults) overridden by flags.
    pub fn to_config(&self) -> Result<EnrichConfig> {
        let mut config = match &self.config {
            Some(path) => EnrichConfig::load(path)?,
            None => EnrichConfig::default(),
        };

        if self.sequential {
            config.parallel = false;
        }
        if let Some(threads) = self.threads {
            config.parallel = true;
            config.num_threads = Some(threads);
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }

        config.rating_policy = match (self.on_missing_rating, self.default_rating) {
            (None, None) => config.rating_policy,
            (Some(MissingRating::Reject), None) => RatingPolicy::Reject,
            (Some(MissingRating::Skip), None) => RatingPolicy::Skip,
            (Some(MissingRating::Default) | None, Some(rating)) => RatingPolicy::Default(rating),
            (Some(MissingRating::Default), None) => match config.rating_policy {
                RatingPolicy::Default(rating) => RatingPolicy::Default(rating),
                _ => {
                    return Err(ReviewSenseError::invalid_argument(
                        "--on-missing-rating default needs --default-rating",
                    ));
                }
            },
            (Some(policy), Some(_)) => {
                return Err(ReviewSenseError::invalid_argument(format!(
                    "--default-rating conflicts with --on-missing-rating {policy:?}"
                )));
            }
        };

        config.validate()?;
        Ok(config)
    }
}

/// Missing-rating policies selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingRating {
    /// Fail the run
    Reject,
    /// Drop the review
    Skip,
    /// Use --default-rating
    Default,
}

/// Arguments for classifying a single score
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Polarity score, conventionally in [-1, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    pub score: f64,

    /// Star rating, conventionally 1 to 5
    #[arg(short, long, allow_hyphen_values = true)]
    pub rating: i64,
}

/// Arguments for scoring text
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Review text to score
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// VADER-format lexicon file replacing the built-in lexicon
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon: Option<PathBuf>,
}

/// Arguments for histogramming an enriched table
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Enriched table to read (CSV or JSONL)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input format (default: from the file extension)
    #[arg(long = "input-format")]
    pub input_type: Option<TableFormat>,

    /// CSV field delimiter
    #[arg(short, long, default_value = ",")]
    pub delimiter: char,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrich_args(extra: &[&str]) -> EnrichArgs {
        let mut argv = vec!["reviewsense", "enrich", "in.csv", "out.csv"];
        argv.extend_from_slice(extra);
        match ReviewSenseArgs::try_parse_from(argv).unwrap().command {
            Command::Enrich(args) => args,
            other => panic!("Expected Enrich command, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = ReviewSenseArgs::try_parse_from(["reviewsense", "stats", "x.csv"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = ReviewSenseArgs::try_parse_from(["reviewsense", "-vv", "stats", "x.csv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            ReviewSenseArgs::try_parse_from(["reviewsense", "--quiet", "stats", "x.csv"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            ReviewSenseArgs::try_parse_from(["reviewsense", "--format", "json", "stats", "x.csv"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_classify_negative_values() {
        let args = ReviewSenseArgs::try_parse_from([
            "reviewsense",
            "classify",
            "--score",
            "-0.3",
            "--rating",
            "4",
        ])
        .unwrap();

        if let Command::Classify(classify) = args.command {
            assert_eq!(classify.score, -0.3);
            assert_eq!(classify.rating, 4);
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_enrich_defaults() {
        let config = enrich_args(&[]).to_config().unwrap();
        assert!(config.parallel);
        assert_eq!(config.rating_policy, RatingPolicy::Reject);
    }

    #[test]
    fn test_enrich_flag_overrides() {
        let config = enrich_args(&["--sequential", "--batch-size", "50", "-d", ";"])
            .to_config()
            .unwrap();
        assert!(!config.parallel);
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.delimiter, ';');

        let config = enrich_args(&["--threads", "3"]).to_config().unwrap();
        assert_eq!(config.num_threads, Some(3));
    }

    #[test]
    fn test_missing_rating_flags() {
        let config = enrich_args(&["--on-missing-rating", "skip"]).to_config().unwrap();
        assert_eq!(config.rating_policy, RatingPolicy::Skip);

        let config = enrich_args(&["--default-rating", "3"]).to_config().unwrap();
        assert_eq!(config.rating_policy, RatingPolicy::Default(3));

        assert!(enrich_args(&["--on-missing-rating", "default"]).to_config().is_err());
        assert!(
            enrich_args(&["--on-missing-rating", "skip", "--default-rating", "3"])
                .to_config()
                .is_err()
        );
    }

    #[test]
    fn test_sequential_conflicts_with_threads() {
        let result = ReviewSenseArgs::try_parse_from([
            "reviewsense",
            "enrich",
            "in.csv",
            "out.csv",
            "--sequential",
            "--threads",
            "2",
        ]);
        assert!(result.is_err());
    }
}
