//! Interactive console driver for the cat collector rosters.
//!
//! The binary wires command-line configuration to a [`menu::Session`] over
//! stdin/stdout. Everything here is generic over the reader and writer so
//! the screens can be driven from tests.

pub mod args;
pub mod forms;
pub mod menu;
pub mod prompt;

pub use args::{Cli, RosterKind};
pub use forms::RosterForm;
pub use menu::{Action, Session, autoload};
pub use prompt::Prompter;
