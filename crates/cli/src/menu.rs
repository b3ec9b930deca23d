//! Interactive menu loop shared by both roster kinds.

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use rand::Rng;
use tracing::{debug, info};

use catcollector_core::{Record, Stats};
use catcollector_infra::{InMemoryRoster, LoadOutcome, RosterRepository};

use crate::forms::RosterForm;
use crate::prompt::Prompter;

/// Upper bound for one generated sample.
const MAX_SAMPLE: usize = 1000;
const DEFAULT_SAMPLE: usize = 10;

/// Load the configured data file before the menu starts.
///
/// A file that exists but cannot be read is fatal under every I/O policy,
/// so the exit save never runs over it.
pub fn autoload<S: Stats>(roster: &mut InMemoryRoster<S>) -> anyhow::Result<()> {
    let path = roster.config().data_file.clone();
    let outcome = roster
        .load()
        .with_context(|| format!("failed to load {}", path.display()))?;
    match outcome {
        LoadOutcome::Loaded(count) => {
            info!(kind = S::KIND, count, "auto-loaded roster");
            Ok(())
        }
        LoadOutcome::Missing => Ok(()),
        LoadOutcome::Skipped => bail!("could not load {}; refusing to start over it", path.display()),
    }
}

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    View,
    Create,
    Update,
    Delete,
    Generate,
    Reports,
    Save,
    Load,
    Exit,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::List,
        Action::View,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Generate,
        Action::Reports,
        Action::Save,
        Action::Load,
        Action::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Action::List => "1",
            Action::View => "2",
            Action::Create => "3",
            Action::Update => "4",
            Action::Delete => "5",
            Action::Generate => "6",
            Action::Reports => "7",
            Action::Save => "8",
            Action::Load => "9",
            Action::Exit => "0",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }

    fn label(self, noun: &str, title: &str) -> String {
        match self {
            Action::List => format!("List all {}", title.to_lowercase()),
            Action::View => format!("View {noun} details"),
            Action::Create => format!("Add new {noun}"),
            Action::Update => format!("Update {noun}"),
            Action::Delete => format!("Delete {noun}"),
            Action::Generate => "Generate random sample data".to_string(),
            Action::Reports => "Analytics & reports".to_string(),
            Action::Save => "Save data".to_string(),
            Action::Load => "Load data".to_string(),
            Action::Exit => "Exit".to_string(),
        }
    }
}

/// A running menu over one roster.
pub struct Session<S: RosterForm, R, W, G> {
    roster: InMemoryRoster<S>,
    prompt: Prompter<R, W>,
    rng: G,
    /// Set once the roster differs from what the data file held at startup.
    changed: bool,
}

impl<S, R, W, G> Session<S, R, W, G>
where
    S: RosterForm,
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(roster: InMemoryRoster<S>, prompt: Prompter<R, W>, rng: G) -> Self {
        Self {
            roster,
            prompt,
            rng,
            changed: false,
        }
    }

    pub fn roster(&self) -> &InMemoryRoster<S> {
        &self.roster
    }

    pub fn into_parts(self) -> (InMemoryRoster<S>, Prompter<R, W>) {
        (self.roster, self.prompt)
    }

    /// Run until the user exits or the input closes, then save to the
    /// configured data file if anything changed.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let choice = match self.prompt.line("Choose option: ") {
                Ok(choice) => choice,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err),
            };

            let Some(action) = Action::from_key(&choice) else {
                self.prompt.say("Unknown option.")?;
                continue;
            };
            if action == Action::Exit {
                break;
            }

            debug!(kind = S::KIND, ?action, "menu action");
            match self.dispatch(action) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err),
            }
        }

        self.exit()
    }

    /// Execute one action; domain and store failures are reported, not returned.
    pub fn dispatch(&mut self, action: Action) -> io::Result<()> {
        self.prompt.blank()?;
        match action {
            Action::List => self.list(),
            Action::View => self.view(),
            Action::Create => self.create(),
            Action::Update => self.update(),
            Action::Delete => self.delete(),
            Action::Generate => self.generate(),
            Action::Reports => S::reports(&mut self.prompt, &self.roster.get_all()),
            Action::Save => self.save(),
            Action::Load => self.load(),
            Action::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.prompt.blank()?;
        self.prompt.say(format!("=== Cat Collector: {} ===", S::TITLE))?;
        for action in Action::ALL {
            let label = action.label(S::NOUN, S::TITLE);
            self.prompt.say(format!("{}) {label}", action.key()))?;
        }
        Ok(())
    }

    fn list(&mut self) -> io::Result<()> {
        let all = self.roster.get_all();
        if all.is_empty() {
            return self.prompt.say(format!("No {} available.", S::TITLE.to_lowercase()));
        }
        self.prompt.say(format!("{} ({}):", S::TITLE, all.len()))?;
        for record in &all {
            self.prompt.say(record)?;
        }
        Ok(())
    }

    /// Ask for a name or an identifier and return a copy of the match.
    fn select(&mut self) -> io::Result<Option<Record<S>>> {
        let mode = self.prompt.line("Search by (1) Name or (2) ID? ")?;
        let found = if mode == "2" {
            let Some(id) = self.prompt.entity_id("Enter ID: ")? else {
                return Ok(None);
            };
            self.roster.get_by_id(id).cloned()
        } else {
            let name = self.prompt.line("Enter name: ")?;
            self.roster.get_by_name(&name).cloned()
        };

        if found.is_none() {
            self.prompt.say(format!("No {} found.", S::NOUN))?;
        }
        Ok(found)
    }

    fn view(&mut self) -> io::Result<()> {
        let Some(record) = self.select()? else {
            return Ok(());
        };
        self.prompt.say("Details:")?;
        self.prompt.say(format!("ID: {}", record.id()))?;
        self.prompt.say(format!("Name: {}", record.name()))?;
        for (label, value) in record.stats().details() {
            self.prompt.say(format!("{label}: {value}"))?;
        }
        Ok(())
    }

    fn create(&mut self) -> io::Result<()> {
        self.prompt.say(format!("Add new {}", S::NOUN))?;
        let name = match (self.prompt.optional("Name: ")?, S::BLANK_NAME) {
            (Some(name), _) => name,
            (None, Some(fallback)) => fallback.to_string(),
            (None, None) => return self.prompt.say("Name cannot be empty."),
        };
        let stats = S::read_new(&mut self.prompt)?;

        let added = Record::new(name, stats).and_then(|record| {
            let line = record.to_string();
            self.roster.add(record).map(|_| line)
        });
        match added {
            Ok(line) => {
                self.changed = true;
                self.prompt.say(format!("Created: {line}"))
            }
            Err(err) => self.prompt.say(format!("Error: {err}")),
        }
    }

    fn update(&mut self) -> io::Result<()> {
        let Some(mut record) = self.select()? else {
            return Ok(());
        };
        self.prompt.say(format!("Updating {}: {} ({})", S::NOUN, record.name(), record.id()))?;
        self.prompt.say("Leave input blank to keep the current value.")?;

        let name = self.prompt.optional(&format!("Name ({}): ", record.name()))?;
        let stats = S::read_edit(&mut self.prompt, record.stats())?;

        let updated = name
            .map_or(Ok(()), |name| record.rename(name))
            .and_then(|()| record.set_stats(stats))
            .and_then(|()| self.roster.update(record.clone()));
        match updated {
            Ok(true) => {
                self.changed = true;
                self.prompt.say(format!("Updated: {record}"))
            }
            Ok(false) => self.prompt.say(format!("That {} no longer exists.", S::NOUN)),
            Err(err) => self.prompt.say(format!("Error: {err}")),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(record) = self.select()? else {
            return Ok(());
        };
        let question = format!("Are you sure you want to delete '{}'? (y/n): ", record.name());
        if !self.prompt.confirm(&question)? {
            return self.prompt.say("Delete cancelled.");
        }

        if self.roster.delete(record.id()) {
            self.changed = true;
            self.prompt.say(format!("Deleted {}.", record.name()))
        } else {
            self.prompt.say("Delete failed.")
        }
    }

    fn generate(&mut self) -> io::Result<()> {
        let count = self.prompt.number_or_keep(
            &format!("How many sample {} [{DEFAULT_SAMPLE}]: ", S::TITLE.to_lowercase()),
            1..=MAX_SAMPLE,
            DEFAULT_SAMPLE,
        )?;
        let replaced = S::generate(count, &mut self.rng).and_then(|sample| self.roster.replace_all(sample));
        match replaced {
            Ok(()) => {
                self.changed = true;
                self.prompt.say(format!(
                    "Generated {count} sample {} and replaced the current data.",
                    S::TITLE.to_lowercase()
                ))
            }
            Err(err) => self.prompt.say(format!("Error: {err}")),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        let default = self.roster.config().data_file.clone();
        let label = format!("File to save (blank for {}): ", default.display());
        let path = self.prompt.path_or(&label, &default)?;

        match self.roster.save_to_file(&path) {
            Ok(()) => self.prompt.say(format!("Saved to {}", path.display())),
            Err(err) => self.prompt.say(format!("Error: {err}")),
        }
    }

    fn load(&mut self) -> io::Result<()> {
        let default = self.roster.config().data_file.clone();
        let label = format!("File to load (blank for {}): ", default.display());
        let path = self.prompt.path_or(&label, &default)?;

        match self.roster.load_from_file(&path) {
            Ok(LoadOutcome::Loaded(n)) => {
                self.changed = true;
                self.prompt.say(format!(
                    "Loaded {n} {} from {}",
                    S::TITLE.to_lowercase(),
                    path.display()
                ))
            }
            Ok(LoadOutcome::Missing) => {
                self.prompt.say(format!("{} does not exist; nothing loaded.", path.display()))
            }
            Ok(LoadOutcome::Skipped) => self.prompt.say("Load failed; keeping the current data."),
            Err(err) => self.prompt.say(format!("Error: {err}")),
        }
    }

    fn exit(&mut self) -> io::Result<()> {
        if !self.changed {
            debug!(kind = S::KIND, "nothing changed; data file left as-is");
            return self.prompt.say("No changes to save. Goodbye!");
        }
        match self.roster.save() {
            Ok(()) => {
                info!(kind = S::KIND, count = self.roster.len(), "saved on exit");
                self.prompt.say(format!(
                    "Saved to {}. Goodbye!",
                    self.roster.config().data_file.display()
                ))
            }
            Err(err) => self.prompt.say(format!("Error: {err}")),
        }
    }
}
