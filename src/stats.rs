//! Fixed-key totals collected per log file.
//!
//! Each processed file owns one `SchemeTotals` and one `SetStatTotals`;
//! both start at zero, grow only by addition, and are discarded after
//! being reported. There is no cross-file accumulation.

use std::fmt;

/// The nine cache schemes whose counters the aggregator sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeId {
    Scheme1_1x,
    Scheme1_2x,
    Scheme1_3x,
    Scheme1_4x,
    Scheme2_1x,
    Scheme2_2x,
    Scheme2_3x,
    Scheme2_4x,
    Uncompressed1x,
}

impl SchemeId {
    /// Every scheme, in report order.
    pub const ALL: [SchemeId; 9] = [
        SchemeId::Scheme1_1x,
        SchemeId::Scheme1_2x,
        SchemeId::Scheme1_3x,
        SchemeId::Scheme1_4x,
        SchemeId::Scheme2_1x,
        SchemeId::Scheme2_2x,
        SchemeId::Scheme2_3x,
        SchemeId::Scheme2_4x,
        SchemeId::Uncompressed1x,
    ];

    /// The token as it appears in `L2.<token>_s<set>_w<way>` log lines.
    pub fn token(self) -> &'static str {
        match self {
            SchemeId::Scheme1_1x => "scheme1_1x",
            SchemeId::Scheme1_2x => "scheme1_2x",
            SchemeId::Scheme1_3x => "scheme1_3x",
            SchemeId::Scheme1_4x => "scheme1_4x",
            SchemeId::Scheme2_1x => "scheme2_1x",
            SchemeId::Scheme2_2x => "scheme2_2x",
            SchemeId::Scheme2_3x => "scheme2_3x",
            SchemeId::Scheme2_4x => "scheme2_4x",
            SchemeId::Uncompressed1x => "uncompressed_1x",
        }
    }

    /// Look up a scheme by the token captured from a log line.
    pub fn from_token(token: &str) -> Option<SchemeId> {
        SchemeId::ALL.iter().copied().find(|s| s.token() == token)
    }
}

/// Per-file totals keyed by scheme.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SchemeTotals {
    totals: [u64; SchemeId::ALL.len()],
}

impl SchemeTotals {
    pub fn add(&mut self, scheme: SchemeId, value: u64) {
        let slot = &mut self.totals[scheme as usize];
        *slot = slot.saturating_add(value);
    }

    pub fn get(&self, scheme: SchemeId) -> u64 {
        self.totals[scheme as usize]
    }
}

impl fmt::Display for SchemeTotals {
    /// All nine keys in fixed order, zeros included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, scheme) in SchemeId::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", scheme.token(), self.get(*scheme))?;
        }
        Ok(())
    }
}

/// Per-file totals for set-indexed statistics. One counter today.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetStatTotals {
    pub evict_bc_write: u64,
}

impl SetStatTotals {
    pub fn add_evict_bc_write(&mut self, value: u64) {
        self.evict_bc_write = self.evict_bc_write.saturating_add(value);
    }
}

impl fmt::Display for SetStatTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evict_bc_write: {}", self.evict_bc_write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for scheme in SchemeId::ALL {
            assert_eq!(SchemeId::from_token(scheme.token()), Some(scheme));
        }
    }

    #[test]
    fn test_from_token_unknown() {
        assert_eq!(SchemeId::from_token("scheme3_1x"), None);
        assert_eq!(SchemeId::from_token("uncompressed_2x"), None);
        assert_eq!(SchemeId::from_token(""), None);
    }

    #[test]
    fn test_add_accumulates_per_scheme() {
        let mut totals = SchemeTotals::default();
        totals.add(SchemeId::Scheme1_1x, 5);
        totals.add(SchemeId::Scheme1_1x, 7);
        totals.add(SchemeId::Scheme2_4x, 3);
        assert_eq!(totals.get(SchemeId::Scheme1_1x), 12);
        assert_eq!(totals.get(SchemeId::Scheme2_4x), 3);
        assert_eq!(totals.get(SchemeId::Uncompressed1x), 0);
    }

    #[test]
    fn test_add_saturates() {
        let mut totals = SchemeTotals::default();
        totals.add(SchemeId::Scheme1_1x, u64::MAX);
        totals.add(SchemeId::Scheme1_1x, 1);
        assert_eq!(totals.get(SchemeId::Scheme1_1x), u64::MAX);
    }

    #[test]
    fn test_scheme_display_fixed_order_with_zeros() {
        let mut totals = SchemeTotals::default();
        totals.add(SchemeId::Scheme1_1x, 12);
        assert_eq!(
            totals.to_string(),
            "scheme1_1x: 12, scheme1_2x: 0, scheme1_3x: 0, scheme1_4x: 0, \
             scheme2_1x: 0, scheme2_2x: 0, scheme2_3x: 0, scheme2_4x: 0, \
             uncompressed_1x: 0"
        );
    }

    #[test]
    fn test_set_stat_display() {
        let mut totals = SetStatTotals::default();
        assert_eq!(totals.to_string(), "evict_bc_write: 0");
        totals.add_evict_bc_write(9);
        totals.add_evict_bc_write(1);
        assert_eq!(totals.to_string(), "evict_bc_write: 10");
    }
}
