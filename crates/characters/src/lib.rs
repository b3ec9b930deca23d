//! Characters roster module (gameplay stats).
//!
//! This crate contains the character schema and its sample generator,
//! implemented purely as deterministic domain logic (no IO, no console).

pub mod character;
pub mod sample;

pub use character::{Character, Gameplay, LEVEL_RANGE, LUCK_RANGE, SPEED_RANGE};
pub use sample::generate_characters;
