//! Layering of YAML config documents.
//!
//! Mappings merge key by key, anything else in the later document replaces
//! the earlier value, and an explicit `null` drops the key so the built-in
//! default applies again.

use serde_yaml::{Mapping, Value};

/// Overlay `top` onto `base`.
pub fn deep_merge(base: &Value, top: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(top_map)) = (base, top) else {
        return top.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in top_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Mapping(merged)
}

/// Fold documents left to right; the last one wins on conflicts.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
