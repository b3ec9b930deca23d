use std::collections::HashSet;
use std::path::Path;

use serde::de::Error as _;
use tracing::{debug, error, info, warn};

use catcollector_core::entity::names_equal;
use catcollector_core::{DomainError, DomainResult, EntityId, Record, Stats};

use super::RosterRepository;
use crate::config::{IoPolicy, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::persistence::{self, LoadOutcome};

/// Vec-backed roster store for one interactive session.
///
/// Lookups are linear scans; rosters stay in the low thousands.
#[derive(Debug, Clone)]
pub struct InMemoryRoster<S> {
    records: Vec<Record<S>>,
    config: StoreConfig,
}

impl<S: Stats> InMemoryRoster<S> {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            records: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrowed view in insertion order.
    pub fn records(&self) -> &[Record<S>] {
        &self.records
    }

    /// Save to the configured data file.
    pub fn save(&self) -> StoreResult<()> {
        self.save_to_file(&self.config.data_file)
    }

    /// Load from the configured data file.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        let path = self.config.data_file.clone();
        self.load_from_file(&path)
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Whether another entity (other than `except`) already uses `name`.
    fn name_taken(&self, name: &str, except: Option<EntityId>) -> bool {
        self.records
            .iter()
            .any(|r| Some(r.id()) != except && r.name_matches(name))
    }

    fn check_name(&self, name: &str, except: Option<EntityId>) -> DomainResult<()> {
        if self.config.name_policy.enforces_uniqueness() && self.name_taken(name, except) {
            warn!(kind = S::KIND, duplicate = name, "rejected duplicate name");
            return Err(DomainError::duplicate_name(name));
        }
        Ok(())
    }

    /// Invariant checks on records read from disk.
    fn check_loaded(&self, path: &Path, records: &[Record<S>]) -> StoreResult<()> {
        let invalid = |msg: String| StoreError::Deserialize {
            path: path.to_path_buf(),
            source: serde_json::Error::custom(msg),
        };

        for record in records {
            record
                .validate()
                .map_err(|e| invalid(format!("entity {}: {e}", record.id())))?;
        }
        check_unique_ids(records).map_err(|e| invalid(e.to_string()))?;

        if self.config.name_policy.enforces_uniqueness() {
            let duplicates = records
                .iter()
                .enumerate()
                .filter(|(i, r)| records[..*i].iter().any(|o| names_equal(o.name(), r.name())))
                .count();
            if duplicates > 0 {
                warn!(
                    kind = S::KIND,
                    path = %path.display(),
                    duplicates,
                    "loaded roster contains duplicate names"
                );
            }
        }

        Ok(())
    }

    /// Swap in an already-checked collection.
    fn install(&mut self, records: Vec<Record<S>>) {
        debug!(
            kind = S::KIND,
            previous = self.records.len(),
            current = records.len(),
            "roster replaced"
        );
        self.records = records;
    }

    fn absorb<T>(&self, op: &'static str, path: &Path, err: StoreError, fallback: T) -> StoreResult<T> {
        match self.config.io_policy {
            IoPolicy::Propagate => Err(err),
            IoPolicy::LogAndContinue => {
                error!(kind = S::KIND, op, path = %path.display(), error = %err, "persistence failed");
                Ok(fallback)
            }
        }
    }
}

/// Every identifier in `records` appears once.
fn check_unique_ids<S: Stats>(records: &[Record<S>]) -> DomainResult<()> {
    let mut ids = HashSet::with_capacity(records.len());
    match records.iter().find(|r| !ids.insert(r.id())) {
        Some(twin) => Err(DomainError::validation(format!("duplicate identifier {}", twin.id()))),
        None => Ok(()),
    }
}

impl<S: Stats> Default for InMemoryRoster<S> {
    fn default() -> Self {
        Self::new(StoreConfig::for_stats::<S>())
    }
}

impl<S: Stats> RosterRepository<S> for InMemoryRoster<S> {
    fn get_all(&self) -> Vec<Record<S>> {
        let mut all = self.records.clone();
        // `sort_by` is stable, so equal scores keep insertion order.
        all.sort_by(|a, b| b.score().total_cmp(&a.score()));
        all
    }

    fn get_by_id(&self, id: EntityId) -> Option<&Record<S>> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn get_by_name(&self, name: &str) -> Option<&Record<S>> {
        self.records.iter().find(|r| r.name_matches(name))
    }

    fn add(&mut self, record: Record<S>) -> DomainResult<EntityId> {
        record.validate()?;
        if self.position(record.id()).is_some() {
            return Err(DomainError::validation(format!(
                "an entity with identifier {} already exists",
                record.id()
            )));
        }
        self.check_name(record.name(), None)?;

        let id = record.id();
        debug!(kind = S::KIND, %id, entity = record.name(), "entity added");
        self.records.push(record);
        Ok(id)
    }

    fn update(&mut self, record: Record<S>) -> DomainResult<bool> {
        record.validate()?;
        let id = record.id();
        let Some(idx) = self.position(id) else {
            debug!(kind = S::KIND, %id, "update for unknown entity");
            return Ok(false);
        };
        self.check_name(record.name(), Some(id))?;

        debug!(kind = S::KIND, %id, "entity updated");
        self.records[idx] = record;
        Ok(true)
    }

    fn delete(&mut self, id: EntityId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.records.remove(idx);
                debug!(kind = S::KIND, %id, "entity deleted");
                true
            }
            None => false,
        }
    }

    fn replace_all(&mut self, records: Vec<Record<S>>) -> DomainResult<()> {
        check_unique_ids(&records)?;
        self.install(records);
        Ok(())
    }

    fn save_to_file(&self, path: &Path) -> StoreResult<()> {
        match persistence::write_json(path, &self.records) {
            Ok(()) => {
                info!(kind = S::KIND, path = %path.display(), count = self.records.len(), "roster saved");
                Ok(())
            }
            Err(err) => self.absorb("save", path, err, ()),
        }
    }

    fn load_from_file(&mut self, path: &Path) -> StoreResult<LoadOutcome> {
        let loaded = persistence::read_json::<Vec<Record<S>>>(path)
            .and_then(|records| match records {
                Some(records) => self.check_loaded(path, &records).map(|()| Some(records)),
                None => Ok(None),
            });

        match loaded {
            Ok(Some(records)) => {
                let count = records.len();
                self.install(records);
                info!(kind = S::KIND, path = %path.display(), count, "roster loaded");
                Ok(LoadOutcome::Loaded(count))
            }
            Ok(None) => {
                debug!(kind = S::KIND, path = %path.display(), "no roster file; nothing loaded");
                Ok(LoadOutcome::Missing)
            }
            Err(err) => self.absorb("load", path, err, LoadOutcome::Skipped),
        }
    }
}
