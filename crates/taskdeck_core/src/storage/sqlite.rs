//! SQLite-backed durable store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections and run migrations before
//!   handing out a usable store.
//! - Implement the `KvStore` capability over a single `kv` table.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.
//! - `set` overwrites the previous value for the key in one statement.
//!
//! # See also
//! - docs/architecture/persistence.md

use super::migrations::apply_migrations;
use super::{KvStore, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Durable key-value store over a SQLite file.
#[derive(Debug)]
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Opens a store file and applies all pending migrations.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=storage status=start mode=file");

        let result = Connection::open(path)
            .map_err(Into::into)
            .and_then(Self::bootstrap);
        match result {
            Ok(store) => {
                info!(
                    "event=store_open module=storage status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=store_open module=storage status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens a transient in-memory store, mainly for tests.
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(mut conn: Connection) -> StorageResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
