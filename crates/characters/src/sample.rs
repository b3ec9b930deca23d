//! Random sample characters.

use rand::Rng;

use catcollector_core::DomainResult;

use crate::character::{Character, Gameplay, LEVEL_RANGE, LUCK_RANGE, SPEED_RANGE};

const TITLES: [&str; 8] = [
    "Swift", "Lucky", "Brave", "Sneaky", "Mighty", "Clever", "Fuzzy", "Nimble",
];

const KINDS: [&str; 8] = [
    "Tabby", "Calico", "Siamese", "Persian", "Sphynx", "Bengal", "Ragdoll", "Maine Coon",
];

pub const MAX_SAMPLE_SCORE: f64 = 10_000.0;

/// Generate `count` characters with random stats inside the valid ranges.
///
/// High scores carry one decimal place. Names are not deduplicated; the
/// character roster allows repeats by default.
pub fn generate_characters<R>(count: usize, rng: &mut R) -> DomainResult<Vec<Character>>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|_| {
            let name = format!(
                "{} {}",
                TITLES[rng.gen_range(0..TITLES.len())],
                KINDS[rng.gen_range(0..KINDS.len())]
            );
            let tenths = rng.gen_range(0..=(MAX_SAMPLE_SCORE as u32) * 10);
            let stats = Gameplay::new(
                rng.gen_range(SPEED_RANGE),
                rng.gen_range(LUCK_RANGE),
                rng.gen_range(LEVEL_RANGE),
                f64::from(tenths) / 10.0,
            );
            Character::new(name, stats)
        })
        .collect()
}
