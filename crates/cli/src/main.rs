use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use catcollector_characters::Gameplay;
use catcollector_cli::{Cli, Prompter, RosterForm, RosterKind, Session, autoload};
use catcollector_infra::InMemoryRoster;
use catcollector_players::CatTally;

fn main() -> Result<()> {
    catcollector_observability::init();

    let cli = Cli::parse();
    match cli.roster {
        RosterKind::Players => run::<CatTally>(&cli),
        RosterKind::Characters => run::<Gameplay>(&cli),
    }
}

fn run<S: RosterForm>(cli: &Cli) -> Result<()> {
    let config = cli.store_config::<S>();
    tracing::info!(
        kind = S::KIND,
        data_file = %config.data_file.display(),
        name_policy = %config.name_policy,
        io_policy = %config.io_policy,
        "starting"
    );

    let mut roster = InMemoryRoster::<S>::new(config);
    if !cli.no_autoload {
        autoload(&mut roster)?;
    }

    let stdin = io::stdin();
    let prompt = Prompter::new(stdin.lock(), io::stdout());
    let mut session = Session::new(roster, prompt, StdRng::from_entropy());
    session.run().context("console session failed")
}
