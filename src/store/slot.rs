//! Typed access to a single slot.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::KeyValueStore;
use crate::error::{ItdeskError, Result};

/// A slot holding a JSON array of `T`.
pub struct Slot<'a, T> {
    store: &'a dyn KeyValueStore,
    name: &'static str,
    _marker: PhantomData<T>,
}

impl<'a, T> Slot<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a typed view over `name` in `store`.
    pub fn new(store: &'a dyn KeyValueStore, name: &'static str) -> Self {
        Self {
            store,
            name,
            _marker: PhantomData,
        }
    }

    /// Slot name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Load all records. An absent or `null` slot is empty.
    pub fn load(&self) -> Result<Vec<T>> {
        match self.store.get(self.name)? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value).map_err(|e| ItdeskError::StoreCorrupt {
                slot: self.name.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Overwrite the slot with `records`.
    pub fn save(&self, records: &[T]) -> Result<()> {
        let value = serde_json::to_value(records)?;
        self.store.set(self.name, &value)
    }

    /// Load, mutate, and save in one step.
    ///
    /// Nothing is written when `f` returns an error.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<T>) -> Result<R>) -> Result<R> {
        let mut records = self.load()?;
        let out = f(&mut records)?;
        self.save(&records)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
    }

    fn item(id: &str) -> Item {
        Item { id: id.to_string() }
    }

    #[test]
    fn absent_slot_loads_empty() {
        let store = MemoryStore::new();
        let slot: Slot<Item> = Slot::new(&store, "items");
        assert!(slot.load().unwrap().is_empty());
    }

    #[test]
    fn null_slot_loads_empty() {
        let store = MemoryStore::new();
        store.set("items", &Value::Null).unwrap();
        let slot: Slot<Item> = Slot::new(&store, "items");
        assert!(slot.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        let slot = Slot::new(&store, "items");
        slot.save(&[item("a"), item("b")]).unwrap();

        assert_eq!(slot.load().unwrap(), vec![item("a"), item("b")]);
        assert_eq!(store.get("items").unwrap(), Some(json!([{"id": "a"}, {"id": "b"}])));
    }

    #[test]
    fn update_persists_changes() {
        let store = MemoryStore::new();
        let slot = Slot::new(&store, "items");
        let len = slot
            .update(|items| {
                items.push(item("x"));
                Ok(items.len())
            })
            .unwrap();

        assert_eq!(len, 1);
        assert_eq!(slot.load().unwrap(), vec![item("x")]);
    }

    #[test]
    fn failed_update_writes_nothing() {
        let store = MemoryStore::new();
        let slot: Slot<Item> = Slot::new(&store, "items");
        let result: Result<()> = slot.update(|items| {
            items.push(item("x"));
            Err(ItdeskError::InvalidInput {
                message: "nope".into(),
            })
        });

        assert!(result.is_err());
        assert!(store.get("items").unwrap().is_none());
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        let store = MemoryStore::new();
        store.set("items", &json!({"id": "a"})).unwrap();
        let slot: Slot<Item> = Slot::new(&store, "items");

        assert!(matches!(
            slot.load().unwrap_err(),
            ItdeskError::StoreCorrupt { .. }
        ));
    }
}
