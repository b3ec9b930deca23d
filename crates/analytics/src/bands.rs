//! Score bands for distribution reports.

use core::fmt;

use catcollector_core::{Record, Stats};

/// Fixed, non-overlapping score ranges.
///
/// Variants are declared lowest first so the derived ordering follows the
/// score ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreBand {
    Below1000,
    From1000,
    From2000,
    From5000,
    From8000,
}

impl ScoreBand {
    /// Every band, highest first (report order).
    pub const DESCENDING: [ScoreBand; 5] = [
        ScoreBand::From8000,
        ScoreBand::From5000,
        ScoreBand::From2000,
        ScoreBand::From1000,
        ScoreBand::Below1000,
    ];

    /// Band containing `score`. Anything under 1000, negatives included,
    /// lands in the lowest band.
    pub fn for_score(score: f64) -> Self {
        if score >= 8000.0 {
            ScoreBand::From8000
        } else if score >= 5000.0 {
            ScoreBand::From5000
        } else if score >= 2000.0 {
            ScoreBand::From2000
        } else if score >= 1000.0 {
            ScoreBand::From1000
        } else {
            ScoreBand::Below1000
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::From8000 => "8000+",
            ScoreBand::From5000 => "5000-7999",
            ScoreBand::From2000 => "2000-4999",
            ScoreBand::From1000 => "1000-1999",
            ScoreBand::Below1000 => "0-999",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCount {
    pub band: ScoreBand,
    pub count: usize,
}

/// Entity count per band, highest band first.
///
/// All five bands are always present; empty bands report zero.
pub fn score_distribution<S: Stats>(entities: &[Record<S>]) -> Vec<BandCount> {
    let mut counts = [0usize; ScoreBand::DESCENDING.len()];
    for r in entities {
        let band = ScoreBand::for_score(r.score());
        if let Some(slot) = ScoreBand::DESCENDING.iter().position(|b| *b == band) {
            counts[slot] += 1;
        }
    }

    ScoreBand::DESCENDING
        .iter()
        .zip(counts)
        .map(|(band, count)| BandCount { band: *band, count })
        .collect()
}
