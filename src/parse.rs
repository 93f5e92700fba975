/// Line classification for simulator `stats.log` files.
///
/// Three fixed patterns, tried in priority order:
/// - `L2.<scheme>_s<set>_w<way> = <value>` for the scheme1/scheme2 family
/// - `L2.uncompressed_1x_s<set>_w<way> = <value>`
/// - `L2.evict_bc_write_s<set> = <value>`
///
/// Patterns anchor at the start of the line only; trailing text after the
/// value is allowed. Lines matching none of them are ignored.
use crate::stats::SchemeId;
use regex::Regex;
use std::sync::LazyLock;

static SCHEME12: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L2\.(scheme[12]_[1234]x)_s(\d+)_w(\d+) = (\d+)").unwrap());
static UNCOMPRESSED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L2\.uncompressed_1x_s(\d+)_w(\d+) = (\d+)").unwrap());
static EVICT_BC_WRITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L2\.evict_bc_write_s(\d+) = (\d+)").unwrap());

/// One statistic extracted from a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStat {
    /// A per-way counter sample for one scheme. Set and way are parsed but
    /// only `value` is aggregated.
    Scheme {
        scheme: SchemeId,
        set: u64,
        way: u64,
        value: u64,
    },
    /// A per-set eviction-write counter sample.
    EvictWrite { set: u64, value: u64 },
}

/// Classify one log line; `None` for lines that match no pattern.
///
/// The scheme patterns are tried before the evict-write pattern. The
/// literal prefixes are disjoint today, but if they ever overlap the first
/// match in this order must keep winning.
pub fn classify(line: &str) -> Option<LineStat> {
    if let Some(caps) = SCHEME12.captures(line) {
        return Some(LineStat::Scheme {
            scheme: SchemeId::from_token(&caps[1])?,
            set: caps[2].parse().ok()?,
            way: caps[3].parse().ok()?,
            value: caps[4].parse().ok()?,
        });
    }
    if let Some(caps) = UNCOMPRESSED.captures(line) {
        return Some(LineStat::Scheme {
            scheme: SchemeId::Uncompressed1x,
            set: caps[1].parse().ok()?,
            way: caps[2].parse().ok()?,
            value: caps[3].parse().ok()?,
        });
    }
    if let Some(caps) = EVICT_BC_WRITE.captures(line) {
        return Some(LineStat::EvictWrite {
            set: caps[1].parse().ok()?,
            value: caps[2].parse().ok()?,
        });
    }
    None
}
