//! Player-specific reports.

use catcollector_players::Player;

use crate::bands::{BandCount, score_distribution};
use crate::summary::{average_score, best, count, filter, top_n, total_tally};

/// Players holding more bad cats than good ones, in snapshot order.
pub fn more_bad_than_good(players: &[Player]) -> Vec<&Player> {
    filter(players, |p| p.stats().has_more_bad_than_good())
}

/// Players with at least one chonky cat, in snapshot order.
pub fn with_chonky(players: &[Player]) -> Vec<&Player> {
    filter(players, |p| p.stats().has_chonky())
}

/// Everything the player analytics screen shows, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOverview<'a> {
    pub count: usize,
    pub average_best_score: f64,
    pub total_cats: u64,
    pub top: Vec<&'a Player>,
    pub best: Option<&'a Player>,
    pub distribution: Vec<BandCount>,
    pub more_bad_than_good: Vec<&'a Player>,
}

pub fn overview(players: &[Player], top: usize) -> PlayerOverview<'_> {
    PlayerOverview {
        count: count(players),
        average_best_score: average_score(players),
        total_cats: total_tally(players),
        top: top_n(players, top),
        best: best(players),
        distribution: score_distribution(players),
        more_bad_than_good: more_bad_than_good(players),
    }
}
