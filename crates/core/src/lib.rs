//! `catcollector-core`: roster building blocks shared by every crate.
//!
//! This crate contains **pure domain** primitives (no IO, no console).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{NamePolicy, Record, Stats};
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
