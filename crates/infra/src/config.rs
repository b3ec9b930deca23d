//! Store configuration.

use core::fmt;
use core::str::FromStr;
use std::path::PathBuf;

use catcollector_core::{DomainError, NamePolicy, Stats};

/// What the store does when a save or load hits an I/O failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum IoPolicy {
    /// Return the error to the caller.
    #[default]
    Propagate,
    /// Log the error and report success; the collection is left unchanged.
    LogAndContinue,
}

impl fmt::Display for IoPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoPolicy::Propagate => f.write_str("propagate"),
            IoPolicy::LogAndContinue => f.write_str("log"),
        }
    }
}

impl FromStr for IoPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(IoPolicy::Propagate),
            "log" | "log-and-continue" => Ok(IoPolicy::LogAndContinue),
            other => Err(DomainError::validation(format!(
                "unknown io policy '{other}' (expected 'propagate' or 'log')"
            ))),
        }
    }
}

/// Settings for one roster store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path used by `save`/`load` when the caller does not pass one.
    pub data_file: PathBuf,
    pub name_policy: NamePolicy,
    pub io_policy: IoPolicy,
}

impl StoreConfig {
    /// Defaults declared by the schema: its file name and name policy.
    pub fn for_stats<S: Stats>() -> Self {
        Self {
            data_file: PathBuf::from(S::DEFAULT_FILE),
            name_policy: S::NAME_POLICY,
            io_policy: IoPolicy::default(),
        }
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn with_name_policy(mut self, name_policy: NamePolicy) -> Self {
        self.name_policy = name_policy;
        self
    }

    pub fn with_io_policy(mut self, io_policy: IoPolicy) -> Self {
        self.io_policy = io_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catcollector_characters::Gameplay;
    use catcollector_players::CatTally;

    #[test]
    fn defaults_follow_schema() {
        let players = StoreConfig::for_stats::<CatTally>();
        assert_eq!(players.data_file, PathBuf::from("players.json"));
        assert_eq!(players.name_policy, NamePolicy::Unique);
        assert_eq!(players.io_policy, IoPolicy::Propagate);

        let characters = StoreConfig::for_stats::<Gameplay>();
        assert_eq!(characters.data_file, PathBuf::from("characters.json"));
        assert_eq!(characters.name_policy, NamePolicy::AllowDuplicates);
    }

    #[test]
    fn builders_override() {
        let config = StoreConfig::for_stats::<CatTally>()
            .with_data_file("elsewhere.json")
            .with_name_policy(NamePolicy::AllowDuplicates)
            .with_io_policy(IoPolicy::LogAndContinue);
        assert_eq!(config.data_file, PathBuf::from("elsewhere.json"));
        assert_eq!(config.name_policy, NamePolicy::AllowDuplicates);
        assert_eq!(config.io_policy, IoPolicy::LogAndContinue);
    }

    #[test]
    fn io_policy_parses() {
        assert_eq!("propagate".parse::<IoPolicy>().unwrap(), IoPolicy::Propagate);
        assert_eq!("LOG".parse::<IoPolicy>().unwrap(), IoPolicy::LogAndContinue);
        assert!("ignore".parse::<IoPolicy>().is_err());
        assert_eq!(IoPolicy::LogAndContinue.to_string(), "log");
    }
}
