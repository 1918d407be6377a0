//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate pure list transitions and snapshot persistence into
//!   use-case level APIs.
//! - Keep view layers decoupled from storage details.

pub mod editor;
pub mod task_service;
pub mod theme_service;
