//! Per-schema screens: data entry, detail view, sample generation, reports.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use rand::Rng;

use catcollector_core::{DomainResult, Record, Stats};

use crate::prompt::Prompter;

pub mod characters;
pub mod players;

/// Everything the generic menu needs to know about one roster kind.
pub trait RosterForm: Stats + Display {
    /// Singular noun used in messages ("player").
    const NOUN: &'static str;
    /// Plural title used in headings ("Players").
    const TITLE: &'static str;
    /// Name to use when the user leaves it blank; `None` rejects blank names.
    const BLANK_NAME: Option<&'static str>;

    /// Ask for every field of a new entity.
    fn read_new<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> io::Result<Self>;

    /// Ask for every field again; blank answers keep `current`.
    fn read_edit<R: BufRead, W: Write>(p: &mut Prompter<R, W>, current: &Self) -> io::Result<Self>;

    /// Labelled fields for the detail screen, after id and name.
    fn details(&self) -> Vec<(&'static str, String)>;

    /// Fresh random sample of `count` entities.
    fn generate<G: Rng + ?Sized>(count: usize, rng: &mut G) -> DomainResult<Vec<Record<Self>>>;

    /// Report screen over a snapshot.
    fn reports<R: BufRead, W: Write>(p: &mut Prompter<R, W>, snapshot: &[Record<Self>]) -> io::Result<()>;
}
