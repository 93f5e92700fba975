mod aggregate;
mod parse;
mod stats;

use clap::Parser;
use std::path::PathBuf;

/// Sum per-set, per-way cache statistics from simulator `stats.log` files
/// into per-scheme totals: scan `<ROOT>/*_small_1c/stats.log`, total the
/// scheme1/scheme2/uncompressed counters and the evict_bc_write counter
/// for each file, and print one summary per file.
#[derive(Parser, Debug)]
#[command(name = "extract-totals", version, about)]
struct Cli {
    /// Directory the discovery glob is evaluated against
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Extra logging (per-line match details)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // diagnostics go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = aggregate::run(&cli.root) {
        tracing::error!(error = %e, "aggregation failed");
        std::process::exit(1);
    }
}
