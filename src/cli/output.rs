//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ReviewSenseArgs};
use crate::enrich::EnrichmentReport;
use crate::error::Result;
use crate::scoring::PolarityScores;
use crate::sentiment::{SentimentBucket, SentimentCategory};

/// Result structure for classifying one score and rating.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub score: f64,
    pub rating: i64,
    pub category: SentimentCategory,
    pub bucket: SentimentBucket,
}

/// Result structure for scoring text.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResult {
    pub text: String,
    pub scorer: String,
    pub scores: PolarityScores,
    pub bucket: SentimentBucket,
}

/// Result structure for an enrichment run.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub input: String,
    pub output: String,
    pub reviews_per_second: f64,
    pub report: EnrichmentReport,
}

/// Result structure for histogramming an enriched table.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub input: String,
    pub report: EnrichmentReport,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &ReviewSenseArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &ReviewSenseArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match std::any::type_name::<T>() {
        name if name.ends_with("EnrichmentResult") || name.ends_with("StatsResult") => {
            output_report_human(&value, args)
        }
        name if name.ends_with("ScoreResult") => output_score_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output an enrichment report with its histograms.
fn output_report_human(value: &serde_json::Value, args: &ReviewSenseArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return output_generic_human(value);
    };

    for key in ["input", "output"] {
        if let Some(path) = obj.get(key).and_then(|p| p.as_str()) {
            println!("{}: {path}", capitalize(key));
        }
    }

    let Some(report) = obj.get("report").and_then(|r| r.as_object()) else {
        return Ok(());
    };
    let count = |key: &str| report.get(key).and_then(|v| v.as_u64()).unwrap_or(0);

    println!("Total reviews: {}", count("total_reviews"));
    println!("Enriched reviews: {}", count("enriched_reviews"));
    if count("skipped_reviews") > 0 {
        println!("Skipped reviews: {}", count("skipped_reviews"));
    }
    println!("Mixed reviews: {}", count("mixed_reviews"));
    if let Some(mean) = report.get("mean_score").and_then(|m| m.as_f64()) {
        println!("Mean score: {mean:.4}");
    }

    let total = count("enriched_reviews");

    println!();
    println!("Sentiment Categories:");
    println!("─────────────────────");
    for category in SentimentCategory::ALL {
        let n = histogram_count(report.get("categories"), category.as_str());
        println!("{}", format_histogram_line(category.as_str(), n, total));
    }

    println!();
    println!("Sentiment Buckets:");
    println!("──────────────────");
    for bucket in SentimentBucket::ALL {
        let n = histogram_count(report.get("buckets"), bucket.as_str());
        println!("{}", format_histogram_line(bucket.as_str(), n, total));
    }

    if args.verbosity() > 1 {
        println!();
        if let Some(duration) = report.get("duration_ms").and_then(|d| d.as_u64()) {
            println!("Time: {}", format_duration(duration));
        }
        if let Some(rate) = obj.get("reviews_per_second").and_then(|r| r.as_f64()) {
            println!("Throughput: {rate:.1} reviews/s");
        }
    }

    Ok(())
}

/// Output a polarity score breakdown.
fn output_score_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return output_generic_human(value);
    };

    if let Some(scores) = obj.get("scores").and_then(|s| s.as_object()) {
        for key in ["compound", "positive", "negative", "neutral"] {
            if let Some(score) = scores.get(key).and_then(|s| s.as_f64()) {
                println!("{}: {score:.4}", capitalize(key));
            }
        }
    }
    if let Some(bucket) = obj.get("bucket").and_then(|b| b.as_str()) {
        println!("Bucket: {bucket}");
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ReviewSenseArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn histogram_count(histogram: Option<&serde_json::Value>, label: &str) -> u64 {
    histogram
        .and_then(|h| h.get(label))
        .and_then(|n| n.as_u64())
        .unwrap_or(0)
}

/// Format one histogram row: label, count, percentage and a bar.
fn format_histogram_line(label: &str, count: u64, total: u64) -> String {
    const BAR_WIDTH: u64 = 30;

    let (percent, bar_len) = if total == 0 {
        (0.0, 0)
    } else {
        (
            count as f64 * 100.0 / total as f64,
            (count * BAR_WIDTH).div_ceil(total),
        )
    };
    format!(
        "{label:<15} {count:>8} {percent:>5.1}% {}",
        "█".repeat(bar_len as usize)
    )
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
    }
}

/// Format duration in human-readable format.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{:.1}m", ms as f64 / 60_000.0)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
