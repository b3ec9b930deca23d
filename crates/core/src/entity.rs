//! The generic roster record and its schema trait.
//!
//! Both roster schemas (players and characters) share one record shape: an
//! immutable identifier, a display name and a schema-specific block of
//! numeric fields. The numeric block is the only thing that varies, so it
//! is the type parameter.

use core::fmt;
use core::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::EntityId;

/// Whether a roster rejects case-insensitive name collisions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum NamePolicy {
    #[default]
    Unique,
    AllowDuplicates,
}

impl NamePolicy {
    pub fn enforces_uniqueness(self) -> bool {
        matches!(self, NamePolicy::Unique)
    }
}

impl fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePolicy::Unique => f.write_str("unique"),
            NamePolicy::AllowDuplicates => f.write_str("allow-duplicates"),
        }
    }
}

impl FromStr for NamePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unique" => Ok(NamePolicy::Unique),
            "allow-duplicates" | "allow_duplicates" | "duplicates" => {
                Ok(NamePolicy::AllowDuplicates)
            }
            other => Err(DomainError::validation(format!(
                "unknown name policy '{other}' (expected 'unique' or 'allow-duplicates')"
            ))),
        }
    }
}

/// Schema-specific numeric fields of a roster record.
///
/// Implementors describe one roster kind: how it is scored, how its
/// category counters add up, which ranges its stats must respect, and the
/// defaults a store for that kind starts from.
pub trait Stats: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned {
    /// Short lowercase label used in logs ("player", "character").
    const KIND: &'static str;

    /// File name used when no persistence path is configured.
    const DEFAULT_FILE: &'static str;

    /// Name policy a store for this kind starts with.
    const NAME_POLICY: NamePolicy;

    /// Best/high score used for ordering, ranking and banding.
    fn score(&self) -> f64;

    /// Sum of the category counters. Schemas without counters report zero.
    fn tally(&self) -> u64 {
        0
    }

    /// Range checks on the numeric fields.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }
}

/// One tracked game participant.
///
/// The derived total (`tally`) is never stored; it is recomputed from the
/// stats on every call and does not appear in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<S> {
    id: EntityId,
    name: String,
    #[serde(flatten)]
    stats: S,
}

impl<S: Stats> Record<S> {
    /// Create a record with a fresh identifier.
    pub fn new(name: impl Into<String>, stats: S) -> DomainResult<Self> {
        Self::from_parts(EntityId::new(), name, stats)
    }

    /// Rebuild a record around an existing identifier.
    pub fn from_parts(id: EntityId, name: impl Into<String>, stats: S) -> DomainResult<Self> {
        let name = normalize_name(name.into())?;
        stats.validate()?;
        Ok(Self { id, name, stats })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &S {
        &self.stats
    }

    pub fn score(&self) -> f64 {
        self.stats.score()
    }

    pub fn tally(&self) -> u64 {
        self.stats.tally()
    }

    /// Case-insensitive exact comparison against `name`.
    pub fn name_matches(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }

    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = normalize_name(name.into())?;
        Ok(())
    }

    /// Replace the numeric block. Rejected stats leave the record untouched.
    pub fn set_stats(&mut self, stats: S) -> DomainResult<()> {
        stats.validate()?;
        self.stats = stats;
        Ok(())
    }

    /// Re-check invariants, e.g. on records that arrived through serde.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be blank"));
        }
        self.stats.validate()
    }
}

impl<S: Stats + fmt::Display> fmt::Display for Record<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {}) - {}", self.name, self.id, self.stats)
    }
}

/// Case-insensitive name equality, ignoring surrounding whitespace.
pub fn names_equal(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn normalize_name(name: String) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("name must not be blank"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Tally {
        apples: u32,
        pears: u32,
        best: u32,
    }

    impl Stats for Tally {
        const KIND: &'static str = "tally";
        const DEFAULT_FILE: &'static str = "tally.json";
        const NAME_POLICY: NamePolicy = NamePolicy::Unique;

        fn score(&self) -> f64 {
            f64::from(self.best)
        }

        fn tally(&self) -> u64 {
            u64::from(self.apples) + u64::from(self.pears)
        }

        fn validate(&self) -> DomainResult<()> {
            if self.best > 10_000 {
                return Err(DomainError::validation("best out of range"));
            }
            Ok(())
        }
    }

    fn tally(best: u32) -> Tally {
        Tally {
            apples: 2,
            pears: 3,
            best,
        }
    }

    #[test]
    fn new_trims_name_and_assigns_id() {
        let r = Record::new("  Mr. Goose ", tally(10)).unwrap();
        assert_eq!(r.name(), "Mr. Goose");
        assert_eq!(r.score(), 10.0);
        assert_eq!(r.tally(), 5);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Record::new("   ", tally(1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn invalid_stats_are_rejected() {
        let err = Record::new("x", tally(20_000)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn set_stats_rejection_leaves_record_untouched() {
        let mut r = Record::new("x", tally(1)).unwrap();
        assert!(r.set_stats(tally(20_000)).is_err());
        assert_eq!(r.stats(), &tally(1));
    }

    #[test]
    fn rename_keeps_identifier() {
        let mut r = Record::new("before", tally(1)).unwrap();
        let id = r.id();
        r.rename("after").unwrap();
        assert_eq!(r.id(), id);
        assert_eq!(r.name(), "after");
        assert!(r.rename("").is_err());
        assert_eq!(r.name(), "after");
    }

    #[test]
    fn name_matching_ignores_case() {
        let r = Record::new("Captain Fluff", tally(1)).unwrap();
        assert!(r.name_matches("captain fluff"));
        assert!(r.name_matches("CAPTAIN FLUFF "));
        assert!(!r.name_matches("Captain"));
    }

    #[test]
    fn serialized_form_is_flat_and_omits_total() {
        let r = Record::new("Flat", tally(7)).unwrap();
        let value = serde_json::to_value(&r).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert_eq!(obj["name"], "Flat");
        assert_eq!(obj["best"], 7);
        assert!(!obj.contains_key("tally"));
        assert!(!obj.contains_key("stats"));

        let back: Record<Tally> = serde_json::from_value(value).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn name_policy_parses_and_displays() {
        assert_eq!("unique".parse::<NamePolicy>().unwrap(), NamePolicy::Unique);
        assert_eq!(
            "Allow-Duplicates".parse::<NamePolicy>().unwrap(),
            NamePolicy::AllowDuplicates
        );
        assert!("sometimes".parse::<NamePolicy>().is_err());
        assert_eq!(NamePolicy::AllowDuplicates.to_string(), "allow-duplicates");
        assert!(NamePolicy::default().enforces_uniqueness());
    }
}
