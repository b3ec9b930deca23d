use core::fmt;
use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use catcollector_core::{DomainError, DomainResult, NamePolicy, Record, Stats};

/// Character record: a playable character with gameplay stats.
pub type Character = Record<Gameplay>;

pub const SPEED_RANGE: RangeInclusive<u32> = 1..=10;
pub const LUCK_RANGE: RangeInclusive<u32> = 0..=100;
pub const LEVEL_RANGE: RangeInclusive<u32> = 1..=100;

/// Gameplay stats of a character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gameplay {
    /// How fast the character moves.
    pub speed: u32,
    /// Affects the chance of finding good cats.
    pub luck: u32,
    pub level: u32,
    /// Best score recorded for this character.
    pub high_score: f64,
}

impl Gameplay {
    pub fn new(speed: u32, luck: u32, level: u32, high_score: f64) -> Self {
        Self {
            speed,
            luck,
            level,
            high_score,
        }
    }
}

impl Default for Gameplay {
    fn default() -> Self {
        Self::new(1, 0, 1, 0.0)
    }
}

impl Stats for Gameplay {
    const KIND: &'static str = "character";
    const DEFAULT_FILE: &'static str = "characters.json";
    const NAME_POLICY: NamePolicy = NamePolicy::AllowDuplicates;

    fn score(&self) -> f64 {
        self.high_score
    }

    fn validate(&self) -> DomainResult<()> {
        check_range("speed", self.speed, &SPEED_RANGE)?;
        check_range("luck", self.luck, &LUCK_RANGE)?;
        check_range("level", self.level, &LEVEL_RANGE)?;
        if !self.high_score.is_finite() || self.high_score < 0.0 {
            return Err(DomainError::validation(format!(
                "high score must be a non-negative number (got {})",
                self.high_score
            )));
        }
        Ok(())
    }
}

fn check_range(field: &str, value: u32, range: &RangeInclusive<u32>) -> DomainResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "{field} must be between {} and {} (got {value})",
            range.start(),
            range.end()
        )))
    }
}

impl fmt::Display for Gameplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Level: {}, Speed: {}, Luck: {}, High Score: {}",
            self.level, self.speed, self.luck, self.high_score
        )
    }
}
