//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by core and view layers.
//! - Enforce the non-blank title rule at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - A constructed task never carries a whitespace-only title.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A user-created work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID generated at creation, immutable afterwards.
    pub id: TaskId,
    /// Short label; non-blank after trimming.
    pub title: String,
    /// Free-form detail text; may be empty.
    pub description: String,
    /// Completion flag; starts as `false`.
    pub completed: bool,
}

impl Task {
    /// Creates a task with a fresh stable ID.
    ///
    /// Returns `None` when `title` trims to the empty string. The title is
    /// stored as given once its trimmed form is non-empty.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Option<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            title,
            description: description.into(),
            completed: false,
        })
    }
}
