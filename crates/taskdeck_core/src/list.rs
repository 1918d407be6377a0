//! Pure task-list transitions.
//!
//! # Responsibility
//! - Implement the four list operations as pure functions: input list in,
//!   new list out, no hidden mutation.
//! - Keep the non-blank-title validation rule in one place.
//!
//! # Invariants
//! - Output order is input order; `add` appends, nothing reorders.
//! - A rejected or missed operation returns an unchanged copy of the input.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::task::{Task, TaskId};

/// Appends a new task with a fresh ID and `completed = false`.
///
/// # Contract
/// - A title that trims to the empty string rejects the add; the returned
///   list equals the input.
pub fn add(tasks: &[Task], title: &str, description: &str) -> Vec<Task> {
    let Some(task) = Task::new(title, description) else {
        return tasks.to_vec();
    };
    let mut next = tasks.to_vec();
    next.push(task);
    next
}

/// Flips `completed` on the task matching `id`.
///
/// # Contract
/// - An absent `id` is a no-op, not an error.
pub fn toggle_complete(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    completed: !task.completed,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Removes the task matching `id`.
///
/// # Contract
/// - An absent `id` is a no-op; removal is idempotent.
pub fn remove(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.id != id)
        .cloned()
        .collect()
}

/// Replaces `title` and `description` on the task matching `id`.
///
/// # Contract
/// - A title that trims to the empty string rejects the edit.
/// - An absent `id` is a no-op.
/// - `completed` is left untouched.
pub fn edit(tasks: &[Task], id: TaskId, title: &str, description: &str) -> Vec<Task> {
    if title.trim().is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    title: title.to_string(),
                    description: description.to_string(),
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}
