//! Theme preference use-case service.
//!
//! # Responsibility
//! - Hold the active display preference and mirror every toggle to the
//!   durable store.
//!
//! # Invariants
//! - No toggle is ever rejected; the preference is a plain two-value flag.

use crate::model::theme::Theme;
use crate::snapshot;
use crate::storage::{KvStore, StorageResult};

/// Use-case service owning the display preference.
pub struct ThemeService<'kv, S: KvStore> {
    kv: &'kv S,
    theme: Theme,
}

impl<'kv, S: KvStore> ThemeService<'kv, S> {
    /// Loads the persisted preference, defaulting to `Light`.
    pub fn load(kv: &'kv S) -> StorageResult<Self> {
        let theme = snapshot::load_theme(kv)?;
        Ok(Self { kv, theme })
    }

    /// Currently active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the preference, persists it, and returns the new value.
    pub fn toggle(&mut self) -> StorageResult<Theme> {
        let next = self.theme.toggled();
        snapshot::save_theme(self.kv, next)?;
        self.theme = next;
        Ok(next)
    }
}
