//! Snapshot persistence for the task list and theme preference.
//!
//! # Responsibility
//! - Encode and decode full snapshots under the fixed durable keys.
//! - Recover malformed persisted content to defaults instead of failing.
//!
//! # Invariants
//! - `TASKS_KEY` holds a JSON array of task records; `THEME_KEY` holds
//!   `"dark"` or `"light"`.
//! - Every write replaces the prior snapshot wholesale (last-write-wins).
//! - Malformed content never produces an `Err`; it is logged and treated as
//!   "no saved data".
//!
//! # See also
//! - docs/architecture/persistence.md

use crate::model::task::Task;
use crate::model::theme::Theme;
use crate::storage::{KvStore, StorageError, StorageResult};
use log::warn;

/// Durable key for the serialized task list.
pub const TASKS_KEY: &str = "tasks";
/// Durable key for the serialized theme preference.
pub const THEME_KEY: &str = "theme";

/// Loads the persisted task list.
///
/// # Contract
/// - An absent snapshot loads as the empty list.
/// - Malformed JSON is logged and loads as the empty list, never an error.
///
/// # Errors
/// - Backend transport failures only.
pub fn load_tasks<S: KvStore>(kv: &S) -> StorageResult<Vec<Task>> {
    let Some(raw) = kv.get(TASKS_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(tasks) => Ok(tasks),
        Err(err) => {
            warn!(
                "event=tasks_load module=snapshot status=recovered error_code=malformed_snapshot error={err}"
            );
            Ok(Vec::new())
        }
    }
}

/// Overwrites the persisted task list with a full serialization of `tasks`.
pub fn save_tasks<S: KvStore>(kv: &S, tasks: &[Task]) -> StorageResult<()> {
    let encoded = serde_json::to_string(tasks).map_err(StorageError::Encode)?;
    kv.set(TASKS_KEY, &encoded)
}

/// Loads the persisted theme preference.
///
/// # Contract
/// - Only the exact stored string `"dark"` yields `Theme::Dark`.
/// - Absent or unrecognized values yield `Theme::Light`; unrecognized values
///   are logged.
pub fn load_theme<S: KvStore>(kv: &S) -> StorageResult<Theme> {
    let Some(raw) = kv.get(THEME_KEY)? else {
        return Ok(Theme::Light);
    };
    match Theme::parse(&raw) {
        Some(theme) => Ok(theme),
        None => {
            warn!(
                "event=theme_load module=snapshot status=recovered error_code=unknown_theme"
            );
            Ok(Theme::Light)
        }
    }
}

/// Overwrites the persisted theme preference.
pub fn save_theme<S: KvStore>(kv: &S, theme: Theme) -> StorageResult<()> {
    kv.set(THEME_KEY, theme.as_str())
}
