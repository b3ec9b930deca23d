//! Infrastructure layer: roster storage, JSON persistence, configuration.

pub mod config;
pub mod error;
pub mod persistence;
pub mod roster;

#[cfg(test)]
mod integration_tests;

pub use config::{IoPolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use persistence::LoadOutcome;
pub use roster::{InMemoryRoster, RosterRepository};
