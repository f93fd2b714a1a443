//! reviewsense CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use reviewsense::cli::args::*;
use reviewsense::cli::commands::*;

fn main() {
    let args = ReviewSenseArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    // RUST_LOG, when set, refines the level chosen by -v/-q
    Builder::from_env(Env::default().default_filter_or(log_level.as_str()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
