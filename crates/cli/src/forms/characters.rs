use std::io::{self, BufRead, Write};

use rand::Rng;

use catcollector_analytics::characters::{average_speed_and_luck, group_by_level, luck_at_least, summary};
use catcollector_analytics::top_n;
use catcollector_characters::{Character, Gameplay, LEVEL_RANGE, LUCK_RANGE, SPEED_RANGE, generate_characters};
use catcollector_core::DomainResult;

use super::RosterForm;
use crate::prompt::Prompter;

const TOP: usize = 5;

impl RosterForm for Gameplay {
    const NOUN: &'static str = "character";
    const TITLE: &'static str = "Characters";
    const BLANK_NAME: Option<&'static str> = Some("Unnamed");

    fn read_new<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> io::Result<Self> {
        Ok(Gameplay::new(
            p.number_in("Speed (1-10): ", SPEED_RANGE)?,
            p.number_in("Luck (0-100): ", LUCK_RANGE)?,
            p.number_in("Level (1-100): ", LEVEL_RANGE)?,
            p.score("High score (>=0): ", None)?,
        ))
    }

    fn read_edit<R: BufRead, W: Write>(p: &mut Prompter<R, W>, current: &Self) -> io::Result<Self> {
        Ok(Gameplay::new(
            p.number_or_keep(&format!("Speed ({}): ", current.speed), SPEED_RANGE, current.speed)?,
            p.number_or_keep(&format!("Luck ({}): ", current.luck), LUCK_RANGE, current.luck)?,
            p.number_or_keep(&format!("Level ({}): ", current.level), LEVEL_RANGE, current.level)?,
            p.score(&format!("High score ({}): ", current.high_score), Some(current.high_score))?,
        ))
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Speed", self.speed.to_string()),
            ("Luck", self.luck.to_string()),
            ("Level", self.level.to_string()),
            ("High Score", self.high_score.to_string()),
        ]
    }

    fn generate<G: Rng + ?Sized>(count: usize, rng: &mut G) -> DomainResult<Vec<Character>> {
        generate_characters(count, rng)
    }

    fn reports<R: BufRead, W: Write>(p: &mut Prompter<R, W>, snapshot: &[Character]) -> io::Result<()> {
        if snapshot.is_empty() {
            return p.say("No data to analyze. Generate or add some characters first.");
        }

        p.say("=== Reports ===")?;
        p.say("1. Average speed and luck")?;
        p.say(format!("2. Top {TOP} by high score"))?;
        p.say("3. Count by level")?;
        p.say("4. Characters with luck >= threshold")?;
        p.say("5. Summary (min/max/avg)")?;

        match p.line("Choose report: ")?.as_str() {
            "1" => {
                let avg = average_speed_and_luck(snapshot);
                p.say(format!("Average Speed: {:.2}", avg.speed))?;
                p.say(format!("Average Luck: {:.2}", avg.luck))?;
            }
            "2" => {
                p.say(format!("Top {TOP} by high score:"))?;
                for c in top_n(snapshot, TOP) {
                    p.say(c)?;
                }
            }
            "3" => {
                p.say("Count by level:")?;
                for (level, count) in group_by_level(snapshot) {
                    p.say(format!("Level {level}: {count} characters"))?;
                }
            }
            "4" => {
                let threshold = p.number_in("Luck threshold (0-100): ", LUCK_RANGE)?;
                p.say(format!("Characters with luck >= {threshold}:"))?;
                for c in luck_at_least(snapshot, threshold) {
                    p.say(c)?;
                }
            }
            "5" => {
                if let Some(s) = summary(snapshot) {
                    p.say(format!("Count: {}", s.count))?;
                    p.say(format!("Min Speed: {}", s.speed.0))?;
                    p.say(format!("Max Speed: {}", s.speed.1))?;
                    p.say(format!("Min Luck: {}", s.luck.0))?;
                    p.say(format!("Max Luck: {}", s.luck.1))?;
                    p.say(format!("Avg High Score: {:.2}", s.average_high_score))?;
                }
            }
            _ => p.say("Invalid report choice.")?,
        }
        Ok(())
    }
}
