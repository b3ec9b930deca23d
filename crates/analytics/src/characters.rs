//! Character-specific reports.

use catcollector_characters::Character;

use crate::summary::{average_by, count, count_by, filter_sorted_desc, min_max};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLuckAverages {
    pub speed: f64,
    pub luck: f64,
}

pub fn average_speed_and_luck(characters: &[Character]) -> SpeedLuckAverages {
    SpeedLuckAverages {
        speed: average_by(characters, |c| f64::from(c.stats().speed)),
        luck: average_by(characters, |c| f64::from(c.stats().luck)),
    }
}

/// `(level, count)` pairs, lowest level first.
pub fn group_by_level(characters: &[Character]) -> Vec<(u32, usize)> {
    count_by(characters, |c| c.stats().level)
}

/// Characters with luck at or above `threshold`, luckiest first.
pub fn luck_at_least(characters: &[Character], threshold: u32) -> Vec<&Character> {
    filter_sorted_desc(characters, |c| c.stats().luck >= threshold, |c| c.stats().luck)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterSummary {
    pub count: usize,
    pub speed: (u32, u32),
    pub luck: (u32, u32),
    pub average_high_score: f64,
}

/// Count, min/max speed and luck, and mean high score. `None` when empty.
pub fn summary(characters: &[Character]) -> Option<CharacterSummary> {
    Some(CharacterSummary {
        count: count(characters),
        speed: min_max(characters, |c| c.stats().speed)?,
        luck: min_max(characters, |c| c.stats().luck)?,
        average_high_score: average_by(characters, |c| c.score()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catcollector_characters::Gameplay;

    fn character(name: &str, speed: u32, luck: u32, level: u32, high: f64) -> Character {
        Character::new(name, Gameplay::new(speed, luck, level, high)).unwrap()
    }

    fn roster() -> Vec<Character> {
        vec![
            character("a", 2, 80, 3, 100.0),
            character("b", 9, 20, 1, 300.0),
            character("c", 5, 80, 3, 200.0),
            character("d", 4, 95, 2, 0.0),
        ]
    }

    #[test]
    fn averages() {
        let avg = average_speed_and_luck(&roster());
        assert_eq!(avg.speed, 5.0);
        assert_eq!(avg.luck, 68.75);
        assert_eq!(average_speed_and_luck(&[]), SpeedLuckAverages { speed: 0.0, luck: 0.0 });
    }

    #[test]
    fn levels_ascending() {
        assert_eq!(group_by_level(&roster()), vec![(1, 1), (2, 1), (3, 2)]);
    }

    #[test]
    fn luck_threshold_sorted_desc_stable() {
        let roster = roster();
        let names: Vec<_> = luck_at_least(&roster, 80).iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["d", "a", "c"]);
        assert!(luck_at_least(&roster, 100).is_empty());
    }

    #[test]
    fn summary_values() {
        let s = summary(&roster()).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.speed, (2, 9));
        assert_eq!(s.luck, (20, 95));
        assert_eq!(s.average_high_score, 150.0);
    }

    #[test]
    fn summary_of_empty_is_none() {
        assert!(summary(&[]).is_none());
    }
}
