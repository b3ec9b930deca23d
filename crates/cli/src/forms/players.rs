use std::io::{self, BufRead, Write};

use rand::Rng;

use catcollector_analytics::players::overview;
use catcollector_core::DomainResult;
use catcollector_players::{CatTally, Player, SampleOptions, generate_players};

use super::RosterForm;
use crate::prompt::Prompter;

const COUNTER: std::ops::RangeInclusive<u32> = 0..=u32::MAX;
const TOP: usize = 5;

impl RosterForm for CatTally {
    const NOUN: &'static str = "player";
    const TITLE: &'static str = "Players";
    const BLANK_NAME: Option<&'static str> = None;

    fn read_new<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> io::Result<Self> {
        Ok(CatTally::new(
            p.number_or_keep("Good cats collected [0]: ", COUNTER, 0)?,
            p.number_or_keep("Bad cats collected [0]: ", COUNTER, 0)?,
            p.number_or_keep("Chonky cats collected [0]: ", COUNTER, 0)?,
            p.number_or_keep("Best score [0]: ", COUNTER, 0)?,
        ))
    }

    fn read_edit<R: BufRead, W: Write>(p: &mut Prompter<R, W>, current: &Self) -> io::Result<Self> {
        Ok(CatTally::new(
            p.number_or_keep(
                &format!("Good cats collected [{}]: ", current.good_cats_collected),
                COUNTER,
                current.good_cats_collected,
            )?,
            p.number_or_keep(
                &format!("Bad cats collected [{}]: ", current.bad_cats_collected),
                COUNTER,
                current.bad_cats_collected,
            )?,
            p.number_or_keep(
                &format!("Chonky cats collected [{}]: ", current.chonky_cats_collected),
                COUNTER,
                current.chonky_cats_collected,
            )?,
            p.number_or_keep(
                &format!("Best score [{}]: ", current.best_score),
                COUNTER,
                current.best_score,
            )?,
        ))
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Good Cats", self.good_cats_collected.to_string()),
            ("Bad Cats", self.bad_cats_collected.to_string()),
            ("Chonky Cats", self.chonky_cats_collected.to_string()),
            ("Best Score", self.best_score.to_string()),
            ("Total Cats", self.total_cats().to_string()),
        ]
    }

    fn generate<G: Rng + ?Sized>(count: usize, rng: &mut G) -> DomainResult<Vec<Player>> {
        generate_players(count, SampleOptions::default(), rng)
    }

    fn reports<R: BufRead, W: Write>(p: &mut Prompter<R, W>, snapshot: &[Player]) -> io::Result<()> {
        let o = overview(snapshot, TOP);

        p.say("=== Analytics & Reports ===")?;
        p.say(format!("Total players: {}", o.count))?;
        p.say(format!("Average best score: {:.2}", o.average_best_score))?;
        p.say(format!("Total cats collected (all players): {}", o.total_cats))?;
        p.blank()?;

        p.say(format!("Top {TOP} players by score:"))?;
        for player in &o.top {
            p.say(format!(" - {} : {}", player.name(), player.stats().best_score))?;
        }
        p.blank()?;

        if let Some(best) = o.best {
            p.say(format!(
                "Best player overall: {} (score {})",
                best.name(),
                best.stats().best_score
            ))?;
        }

        p.say("Score range distribution:")?;
        for band in &o.distribution {
            p.say(format!(" {} => {}", band.band, band.count))?;
        }
        p.blank()?;

        p.say("Players with more bad cats than good cats:")?;
        for player in &o.more_bad_than_good {
            let tally = player.stats();
            p.say(format!(
                " - {} (bad {} > good {})",
                player.name(),
                tally.bad_cats_collected,
                tally.good_cats_collected
            ))?;
        }
        Ok(())
    }
}
