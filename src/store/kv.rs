//! The key-value store trait and its in-memory implementation.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::Result;

/// Key-value storage keyed by slot name.
///
/// Values are whole JSON documents. Implementations must make `set`
/// all-or-nothing: a reader never observes a half-written slot.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored in a slot. Returns `None` if the slot is absent.
    fn get(&self, slot: &str) -> Result<Option<Value>>;

    /// Overwrite a slot.
    fn set(&self, slot: &str, value: &Value) -> Result<()>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List the slots that currently hold a value, sorted.
    fn slots(&self) -> Result<Vec<String>>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Value>> {
        // A poisoned map is still structurally valid; every write replaces a
        // whole value.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, slot: &str) -> Result<Option<Value>> {
        Ok(self.lock().get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &Value) -> Result<()> {
        self.lock().insert(slot.to_string(), value.clone());
        Ok(())
    }

    fn delete(&self, slot: &str) -> Result<()> {
        self.lock().remove(slot);
        Ok(())
    }

    fn slots(&self) -> Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("equipments").unwrap().is_none());

        store.set("equipments", &json!([{"id": "1"}])).unwrap();
        assert_eq!(
            store.get("equipments").unwrap(),
            Some(json!([{"id": "1"}]))
        );
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::new();
        store.set("a", &json!([1])).unwrap();
        store.set("a", &json!([2, 3])).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(json!([2, 3])));
    }

    #[test]
    fn memory_store_delete_and_list() {
        let store = MemoryStore::new();
        store.set("b", &json!([])).unwrap();
        store.set("a", &json!([])).unwrap();
        assert_eq!(store.slots().unwrap(), vec!["a", "b"]);

        store.delete("a").unwrap();
        store.delete("missing").unwrap();
        assert_eq!(store.slots().unwrap(), vec!["b"]);
    }
}
