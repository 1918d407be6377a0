//! Domain model for tasks and the display preference.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep the wire-level encoding rules next to the types they encode.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal from the list; there is no tombstone state.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod task;
pub mod theme;
