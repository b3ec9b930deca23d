//! Command-line flags.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use catcollector_core::{NamePolicy, Stats};
use catcollector_infra::{IoPolicy, StoreConfig};

/// Manage a roster of cat collectors or game characters.
#[derive(Debug, Parser)]
#[command(name = "catcollector")]
#[command(about = "Cat Collector roster manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Which roster to manage.
    #[arg(long, value_enum, default_value_t = RosterKind::Players)]
    pub roster: RosterKind,

    /// Data file used for auto-load, exit save and blank save/load paths.
    #[arg(long, env = "CATCOLLECTOR_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Name rule override: `unique` or `allow-duplicates`.
    #[arg(long, env = "CATCOLLECTOR_NAME_POLICY")]
    pub name_policy: Option<NamePolicy>,

    /// File failure handling: `propagate` or `log`.
    #[arg(long, env = "CATCOLLECTOR_IO_POLICY")]
    pub io_policy: Option<IoPolicy>,

    /// Start with an empty roster instead of loading the data file.
    #[arg(long)]
    pub no_autoload: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RosterKind {
    Players,
    Characters,
}

impl Cli {
    /// Store configuration for schema `S`, schema defaults overridden by flags.
    pub fn store_config<S: Stats>(&self) -> StoreConfig {
        let mut config = StoreConfig::for_stats::<S>();
        if let Some(path) = &self.data_file {
            config = config.with_data_file(path.clone());
        }
        if let Some(policy) = self.name_policy {
            config = config.with_name_policy(policy);
        }
        if let Some(policy) = self.io_policy {
            config = config.with_io_policy(policy);
        }
        config
    }
}
