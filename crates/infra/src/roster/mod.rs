//! Roster storage abstractions.

use std::path::Path;

use catcollector_core::{DomainResult, EntityId, Record, Stats};

use crate::error::StoreResult;
use crate::persistence::LoadOutcome;

pub mod in_memory;

pub use in_memory::InMemoryRoster;

/// Owning store for one roster kind.
///
/// The store is the only holder of the collection. Readers get owned
/// snapshots or short-lived borrows; writers go through the methods below.
pub trait RosterRepository<S: Stats> {
    /// Every entity, highest score first. Equal scores keep insertion order.
    fn get_all(&self) -> Vec<Record<S>>;

    fn get_by_id(&self, id: EntityId) -> Option<&Record<S>>;

    /// Case-insensitive exact name match; the first match wins.
    fn get_by_name(&self, name: &str) -> Option<&Record<S>>;

    /// Append a new entity and return its identifier.
    fn add(&mut self, record: Record<S>) -> DomainResult<EntityId>;

    /// Overwrite name and stats of the entity with the same identifier.
    ///
    /// Returns `Ok(false)` without touching anything when the identifier is
    /// unknown.
    fn update(&mut self, record: Record<S>) -> DomainResult<bool>;

    /// Remove an entity. Returns `false` when the identifier is unknown.
    #[must_use]
    fn delete(&mut self, id: EntityId) -> bool;

    /// Discard the current collection and install `records` in order.
    ///
    /// A repeated identifier is a `Validation` error and leaves the current
    /// collection untouched.
    fn replace_all(&mut self, records: Vec<Record<S>>) -> DomainResult<()>;

    /// Write the whole collection to `path` as indented JSON.
    fn save_to_file(&self, path: &Path) -> StoreResult<()>;

    /// Replace the collection with the contents of `path`.
    ///
    /// A missing file leaves the collection untouched. Malformed content is
    /// an error and also leaves the collection untouched.
    fn load_from_file(&mut self, path: &Path) -> StoreResult<LoadOutcome>;
}
