//! In-memory store double for tests and wiring demos.

use super::{KvStore, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Non-durable `KvStore` backed by a plain map.
///
/// Single-threaded by design; interior mutability keeps the `KvStore`
/// signatures identical to the durable backend.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for InMemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
