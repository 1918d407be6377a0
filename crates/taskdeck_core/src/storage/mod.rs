//! Durable key-value storage contracts and backends.
//!
//! # Responsibility
//! - Define the injectable `get`/`set` capability the snapshot layer writes
//!   through.
//! - Keep SQLite details behind the storage boundary.
//!
//! # Invariants
//! - Values are full snapshots, overwritten wholesale (last-write-wins).
//! - Application data is never read or written before migrations succeed.
//!
//! # See also
//! - docs/architecture/persistence.md

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod memory;
mod sqlite;

pub use memory::InMemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage failure.
///
/// Malformed *content* is not represented here; the snapshot layer recovers
/// it locally and never surfaces it as an error.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Encode(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Injectable durable key-value capability.
///
/// Implementations take `&self`; the execution model is single-threaded, so
/// interior mutability without locking is sufficient.
pub trait KvStore {
    /// Reads the full value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
