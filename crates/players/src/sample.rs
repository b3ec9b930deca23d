//! Random sample players.

use std::collections::HashSet;

use rand::Rng;

use catcollector_core::DomainResult;

use crate::player::{CatTally, Player};

pub const SAMPLE_NAMES: [&str; 15] = [
    "Mr. Goose",
    "Ms. Whiskers",
    "Captain Fluff",
    "Lady Purrington",
    "Sir Meowsalot",
    "Duchess Furrball",
    "Baron von Cuddles",
    "Countess Snugglepaws",
    "Lord Whiskerface",
    "Princess Paws",
    "Admiral Fuzzybottom",
    "General Purr",
    "Queen Meowths",
    "Duke Clawdia",
    "Emperor Furrypants",
];

/// Upper bounds for generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    /// Cap shared by the three cat counters of one player.
    pub max_cats: u32,
    pub max_score: u32,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            max_cats: 200,
            max_score: 10_000,
        }
    }
}

/// Generate `count` players with randomized names, counters and scores.
///
/// Names are drawn from [`SAMPLE_NAMES`]; a name drawn a second time gets
/// the player's index appended so the batch stays unique. Counters are
/// drawn in order (good, bad, chonky) and each one is bounded by what the
/// previous ones left of `max_cats`.
pub fn generate_players<R>(count: usize, options: SampleOptions, rng: &mut R) -> DomainResult<Vec<Player>>
where
    R: Rng + ?Sized,
{
    let mut used = HashSet::new();
    let mut players = Vec::with_capacity(count);

    for i in 0..count {
        let base = SAMPLE_NAMES[rng.gen_range(0..SAMPLE_NAMES.len())];
        let name = if used.insert(base) {
            base.to_string()
        } else {
            format!("{base}{i}")
        };

        let max = options.max_cats;
        let good = rng.gen_range(0..=max);
        let bad = rng.gen_range(0..=max - good);
        let chonky = rng.gen_range(0..=max - good - bad);
        let best_score = rng.gen_range(0..=options.max_score);

        players.push(Player::new(name, CatTally::new(good, bad, chonky, best_score))?);
    }

    Ok(players)
}
