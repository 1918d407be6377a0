//! Per-item edit buffer.
//!
//! # Responsibility
//! - Hold transient draft state for editing one task's title/description.
//! - Apply committed drafts through the task service.
//!
//! # Invariants
//! - The draft is independent per task; nothing here enforces that only one
//!   editor is active at a time.
//! - A commit with a blank trimmed title changes nothing and stays in edit
//!   mode.

use crate::model::task::{Task, TaskId};
use crate::service::task_service::TaskService;
use crate::storage::{KvStore, StorageResult};

/// Transient edit-mode state scoped to a single displayed task.
#[derive(Debug, Default)]
pub struct TaskEditor {
    active: bool,
    /// Draft title, written directly by the view layer.
    pub title: String,
    /// Draft description, written directly by the view layer.
    pub description: String,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether edit mode is currently entered.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seeds the draft from the task's current fields and enters edit mode.
    pub fn begin(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description.clone();
        self.active = true;
    }

    /// Discards the draft, resetting it to the task's current fields, and
    /// exits edit mode.
    pub fn cancel(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description.clone();
        self.active = false;
    }

    /// Applies the draft through the task service's `edit` operation.
    ///
    /// # Contract
    /// - A blank trimmed draft title rejects the commit: edit mode stays
    ///   active, nothing changes, and `Ok(false)` is returned.
    /// - Otherwise edit mode is exited, including when `id` no longer exists
    ///   in the list; the return value reports whether the list changed.
    pub fn commit<S: KvStore>(
        &mut self,
        service: &mut TaskService<'_, S>,
        id: TaskId,
    ) -> StorageResult<bool> {
        if self.title.trim().is_empty() {
            return Ok(false);
        }
        let changed = service.edit(id, &self.title, &self.description)?;
        self.active = false;
        Ok(changed)
    }
}
