//! Players roster module (cat collectors).
//!
//! This crate contains the player schema and its sample generator,
//! implemented purely as deterministic domain logic (no IO, no console).

pub mod player;
pub mod sample;

pub use player::{CatTally, Player};
pub use sample::{SampleOptions, generate_players};
