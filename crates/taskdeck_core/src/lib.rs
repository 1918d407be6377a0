//! Core domain logic for Taskdeck.
//! This crate is the single source of truth for task-list invariants.

pub mod list;
pub mod logging;
pub mod model;
pub mod service;
pub mod snapshot;
pub mod storage;

pub use logging::{default_log_level, init_logging};
pub use model::task::{Task, TaskId};
pub use model::theme::Theme;
pub use service::editor::TaskEditor;
pub use service::task_service::TaskService;
pub use service::theme_service::ThemeService;
pub use storage::{InMemoryKvStore, KvStore, SqliteKvStore, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
