//! Discovery of `stats.log` files, per-file accumulation, and reporting.
//!
//! Files are processed strictly one at a time; each owns its own totals
//! and its own file handle, released when `process_file` returns.

use crate::parse::{self, LineStat};
use crate::stats::{SchemeTotals, SetStatTotals};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Fixed location of simulator logs below the scan root.
const STATS_GLOB: &str = "*_small_1c/stats.log";

/// Find every `stats.log` under a `*_small_1c` directory below `root`.
///
/// Paths come back sorted so repeated runs report in the same order.
/// Zero matches is not an error.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>, AggregateError> {
    let pattern = root.join(STATS_GLOB);
    let pattern = pattern.to_string_lossy();

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).map_err(AggregateError::Pattern)? {
        files.push(entry.map_err(AggregateError::Glob)?);
    }
    files.sort();
    Ok(files)
}

/// Sum every recognized statistic in one log file.
///
/// Unrecognized lines contribute nothing. An open or read failure is fatal
/// for the run; no partial totals are returned.
pub fn process_file(path: &Path) -> Result<(SchemeTotals, SetStatTotals), AggregateError> {
    let file = std::fs::File::open(path).map_err(|e| AggregateError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = std::io::BufReader::new(file);

    let mut schemes = SchemeTotals::default();
    let mut set_stats = SetStatTotals::default();

    for line in reader.lines() {
        let line = line.map_err(|e| AggregateError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        match parse::classify(&line) {
            Some(LineStat::Scheme {
                scheme,
                set,
                way,
                value,
            }) => {
                tracing::debug!(scheme = scheme.token(), set, way, value, "scheme sample");
                schemes.add(scheme, value);
            }
            Some(LineStat::EvictWrite { set, value }) => {
                tracing::debug!(set, value, "evict_bc_write sample");
                set_stats.add_evict_bc_write(value);
            }
            None => {}
        }
    }

    Ok((schemes, set_stats))
}

/// Print the summary block for one processed file: all nine scheme keys and
/// the evict_bc_write key, zeros included.
pub fn report(path: &Path, schemes: &SchemeTotals, set_stats: &SetStatTotals) {
    println!("Test @{} had the following data", path.display());
    println!("\t{schemes}");
    println!("\t{set_stats}");
}

/// Discover and aggregate every log file below `root`, one at a time.
/// Produces no output when nothing matches.
pub fn run(root: &Path) -> Result<(), AggregateError> {
    let files = discover_files(root)?;
    tracing::debug!(count = files.len(), "discovered stats.log files");

    for path in &files {
        println!("Processing data in file @{}", path.display());
        let (schemes, set_stats) = process_file(path)?;
        report(path, &schemes, &set_stats);
    }
    Ok(())
}

/// Errors from discovery or file processing.
#[derive(Debug)]
pub enum AggregateError {
    /// The discovery glob failed to compile against the scan root.
    Pattern(glob::PatternError),
    /// A directory entry could not be read during discovery.
    Glob(glob::GlobError),
    /// A discovered file could not be opened.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Reading a line from an open file failed.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateError::Pattern(e) => {
                write!(f, "invalid discovery pattern: {e}")
            }
            AggregateError::Glob(e) => {
                write!(f, "failed to walk directory during discovery: {e}")
            }
            AggregateError::Open { path, source } => {
                write!(f, "failed to open '{}': {source}", path.display())
            }
            AggregateError::Read { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AggregateError {}
