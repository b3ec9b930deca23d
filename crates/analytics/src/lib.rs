//! `catcollector-analytics`
//!
//! **Responsibility:** read-only reports over a roster snapshot.
//!
//! This crate is intentionally **not** part of the store:
//! - It takes borrowed slices and never mutates them.
//! - It performs no IO and does not log.
//! - Empty input is a defined case (zero / none), never an error.

pub mod bands;
pub mod characters;
pub mod players;
pub mod summary;

pub use bands::{BandCount, ScoreBand, score_distribution};
pub use summary::{
    average_by, average_score, best, count, count_by, filter, filter_sorted_desc, min_max,
    top_n, total_tally,
};
