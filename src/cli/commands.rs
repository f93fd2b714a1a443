//! Command implementations for the reviewsense CLI.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::enrich::{Enricher, EnrichmentReport};
use crate::error::Result;
use crate::scoring::{LexiconScorer, PolarityScorer, SentimentLexicon};
use crate::sentiment::{bucketize, classify};
use crate::table::{self, TableFormat};

/// Execute a CLI command.
pub fn execute_command(args: ReviewSenseArgs) -> Result<()> {
    match &args.command {
        Command::Enrich(enrich_args) => enrich_reviews(enrich_args.clone(), &args),
        Command::Classify(classify_args) => classify_score(classify_args.clone(), &args),
        Command::Score(score_args) => score_text(score_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Enrich a review table.
fn enrich_reviews(args: EnrichArgs, cli_args: &ReviewSenseArgs) -> Result<()> {
    let config = args.to_config()?;
    let input_format = resolve_format(args.input_type, &args.input)?;
    let output_format = resolve_format(args.output_type, &args.output)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Enriching {} ({input_format:?}) into {} ({output_format:?})",
            args.input.display(),
            args.output.display()
        );
    }

    let scorer = build_lexicon_scorer(args.lexicon.as_deref())?;
    let enricher = Enricher::new(Arc::new(scorer), config.clone())?;

    let source = table::open_source(&args.input, input_format, config.delimiter)?;

    // OUTPUT only appears once every batch has been enriched
    let start = Instant::now();
    let report = table::write_atomic(&args.output, output_format, config.delimiter, |sink| {
        enricher.run(source.as_ref(), sink)
    })?;
    let elapsed = start.elapsed().as_secs_f64();

    let reviews_per_second = if elapsed > 0.0 {
        report.total_reviews as f64 / elapsed
    } else {
        0.0
    };

    output_result(
        "Reviews enriched successfully",
        &EnrichmentResult {
            input: args.input.to_string_lossy().to_string(),
            output: args.output.to_string_lossy().to_string(),
            reviews_per_second,
            report,
        },
        cli_args,
    )
}

/// Classify one score and rating.
fn classify_score(args: ClassifyArgs, cli_args: &ReviewSenseArgs) -> Result<()> {
    output_result(
        "Classification",
        &ClassificationResult {
            score: args.score,
            rating: args.rating,
            category: classify(args.score, args.rating),
            bucket: bucketize(args.score),
        },
        cli_args,
    )
}

/// Score a piece of review text.
fn score_text(args: ScoreArgs, cli_args: &ReviewSenseArgs) -> Result<()> {
    let scorer = build_lexicon_scorer(args.lexicon.as_deref())?;
    let scores = scorer.polarity_scores(&args.text)?;

    output_result(
        "Polarity scores",
        &ScoreResult {
            scorer: scorer.name().to_string(),
            bucket: bucketize(scores.compound),
            text: args.text,
            scores,
        },
        cli_args,
    )
}

/// Show the histograms of an enriched table.
fn show_stats(args: StatsArgs, cli_args: &ReviewSenseArgs) -> Result<()> {
    let format = resolve_format(args.input_type, &args.input)?;
    let records = table::read_enriched(&args.input, format, args.delimiter)?;
    log::debug!("read {} enriched records from {}", records.len(), args.input.display());

    output_result(
        "Sentiment statistics",
        &StatsResult {
            input: args.input.to_string_lossy().to_string(),
            report: EnrichmentReport::from_records(&records),
        },
        cli_args,
    )
}

/// Build the lexicon scorer, from `lexicon_file` when given.
pub fn build_lexicon_scorer(lexicon_file: Option<&Path>) -> Result<LexiconScorer> {
    match lexicon_file {
        Some(path) => {
            let lexicon = SentimentLexicon::load(path)?;
            log::info!("loaded {} lexicon entries from {}", lexicon.len(), path.display());
            LexiconScorer::with_lexicon(lexicon)
        }
        None => LexiconScorer::new(),
    }
}

fn resolve_format(explicit: Option<TableFormat>, path: &Path) -> Result<TableFormat> {
    match explicit {
        Some(format) => Ok(format),
        None => TableFormat::from_path(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_resolve_format() {
        assert_eq!(
            resolve_format(None, Path::new("reviews.csv")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            resolve_format(Some(TableFormat::Jsonl), Path::new("reviews.txt")).unwrap(),
            TableFormat::Jsonl
        );
        assert!(resolve_format(None, Path::new("reviews.txt")).is_err());
    }

    #[test]
    fn test_build_lexicon_scorer_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "splendid\t3.0\t0.5\t[3, 3]").unwrap();

        let scorer = build_lexicon_scorer(Some(file.path())).unwrap();
        assert!(scorer.score("splendid").unwrap() > 0.5);

        let missing = build_lexicon_scorer(Some(Path::new("/nonexistent/lexicon.txt")));
        assert!(missing.is_err());
    }

    #[test]
    fn test_enrich_command_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("reviews.csv");
        let output = dir.path().join("enriched.jsonl");
        std::fs::write(&input, "ReviewID,Rating,ReviewText\nR1,5,I love it\nR2,1,Awful\n").unwrap();

        let args = ReviewSenseArgs::try_parse_from([
            "reviewsense",
            "--quiet",
            "--format",
            "json",
            "enrich",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--sequential",
        ])
        .unwrap();
        execute_command(args).unwrap();

        let records = table::read_enriched(&output, TableFormat::Jsonl, ',').unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].review_id, "R1");
        assert_eq!(records[1].review_id, "R2");
    }

    #[test]
    fn test_failed_enrich_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("reviews.csv");
        let output = dir.path().join("enriched.csv");
        std::fs::write(&input, "ReviewID,Rating,ReviewText\nR1,5,good\nR2,4,fine\nR3,,no stars\n")
            .unwrap();

        let args = ReviewSenseArgs::try_parse_from([
            "reviewsense",
            "--quiet",
            "enrich",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--sequential",
            "--batch-size",
            "2",
        ])
        .unwrap();

        assert!(execute_command(args).is_err());
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
