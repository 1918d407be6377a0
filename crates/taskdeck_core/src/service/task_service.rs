//! Task list use-case service.
//!
//! # Responsibility
//! - Hold the in-memory list and mirror every successful change to the
//!   durable store.
//! - Delegate list transitions to the pure operations in `crate::list`.
//!
//! # Invariants
//! - A reported change has already been persisted when the call returns.
//! - A rejected or missed operation performs no write.

use crate::list;
use crate::model::task::{Task, TaskId};
use crate::snapshot;
use crate::storage::{KvStore, StorageResult};

/// Use-case service owning the task list and borrowing the durable store.
pub struct TaskService<'kv, S: KvStore> {
    kv: &'kv S,
    tasks: Vec<Task>,
}

impl<'kv, S: KvStore> TaskService<'kv, S> {
    /// Loads the persisted snapshot into a fresh service.
    ///
    /// Malformed persisted content is recovered to the empty list inside the
    /// snapshot layer; only backend transport failures surface here.
    pub fn load(kv: &'kv S) -> StorageResult<Self> {
        let tasks = snapshot::load_tasks(kv)?;
        Ok(Self { kv, tasks })
    }

    /// Current list in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by ID.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a new task; returns whether the list changed.
    ///
    /// A blank trimmed title rejects the add silently (`Ok(false)`).
    pub fn add(&mut self, title: &str, description: &str) -> StorageResult<bool> {
        self.apply(list::add(&self.tasks, title, description))
    }

    /// Flips the completion flag on `id`; `Ok(false)` when `id` is absent.
    pub fn toggle_complete(&mut self, id: TaskId) -> StorageResult<bool> {
        self.apply(list::toggle_complete(&self.tasks, id))
    }

    /// Removes the task matching `id`; `Ok(false)` when `id` is absent.
    pub fn remove(&mut self, id: TaskId) -> StorageResult<bool> {
        self.apply(list::remove(&self.tasks, id))
    }

    /// Replaces title/description on `id`, leaving `completed` untouched.
    ///
    /// A blank trimmed title or an absent `id` rejects the edit silently.
    pub fn edit(&mut self, id: TaskId, title: &str, description: &str) -> StorageResult<bool> {
        self.apply(list::edit(&self.tasks, id, title, description))
    }

    fn apply(&mut self, next: Vec<Task>) -> StorageResult<bool> {
        if next == self.tasks {
            return Ok(false);
        }
        snapshot::save_tasks(self.kv, &next)?;
        self.tasks = next;
        Ok(true)
    }
}
