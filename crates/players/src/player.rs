use core::fmt;

use serde::{Deserialize, Serialize};

use catcollector_core::{NamePolicy, Record, Stats};

/// Player record: a cat collector with per-category counters.
pub type Player = Record<CatTally>;

/// Cats collected per category plus the player's best score.
///
/// Counters are unsigned, so the non-negative convention holds by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatTally {
    pub good_cats_collected: u32,
    pub bad_cats_collected: u32,
    pub chonky_cats_collected: u32,
    pub best_score: u32,
}

impl CatTally {
    pub fn new(good: u32, bad: u32, chonky: u32, best_score: u32) -> Self {
        Self {
            good_cats_collected: good,
            bad_cats_collected: bad,
            chonky_cats_collected: chonky,
            best_score,
        }
    }

    pub fn total_cats(&self) -> u64 {
        u64::from(self.good_cats_collected)
            + u64::from(self.bad_cats_collected)
            + u64::from(self.chonky_cats_collected)
    }

    pub fn has_more_bad_than_good(&self) -> bool {
        self.bad_cats_collected > self.good_cats_collected
    }

    pub fn has_chonky(&self) -> bool {
        self.chonky_cats_collected > 0
    }
}

impl Stats for CatTally {
    const KIND: &'static str = "player";
    const DEFAULT_FILE: &'static str = "players.json";
    const NAME_POLICY: NamePolicy = NamePolicy::Unique;

    fn score(&self) -> f64 {
        f64::from(self.best_score)
    }

    fn tally(&self) -> u64 {
        self.total_cats()
    }
}

impl fmt::Display for CatTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BestScore: {}, Good: {}, Bad: {}, Chonky: {}, Total: {}",
            self.best_score,
            self.good_cats_collected,
            self.bad_cats_collected,
            self.chonky_cats_collected,
            self.total_cats()
        )
    }
}
