//! Store error model.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use catcollector_core::DomainError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation.
///
/// Validation and name conflicts arrive as [`StoreError::Domain`]; the other
/// variants come from the persistence boundary and carry the file involved.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to deserialize roster from {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize roster for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io { .. })
    }

    pub fn is_deserialize(&self) -> bool {
        matches!(self, StoreError::Deserialize { .. })
    }
}
