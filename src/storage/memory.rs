use std::collections::BTreeMap;

use serde_json::Value;

use super::KeyValueStore;

/// Volatile store, useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_f64("balance", 0.0), 0.0);
        assert_eq!(store.get_i64("theme", 0), 0);

        store.set_f64("balance", 42.5);
        store.set_i64("theme", 2);
        store.set_string("transactions", "1,2");
        assert_eq!(store.get_f64("balance", 0.0), 42.5);
        assert_eq!(store.get_i64("theme", 0), 2);
        assert_eq!(store.get_string("transactions").as_deref(), Some("1,2"));

        store.set_string("theme", "wrong type");
        assert_eq!(store.get_i64("theme", 7), 7);
    }

    #[test]
    fn non_finite_floats_are_not_stored() {
        let mut store = MemoryStore::new();
        store.set_f64("balance", 1.0);
        store.set_f64("balance", f64::NAN);
        assert!(store.get("balance").is_none());
        assert!(store.is_empty());
    }
}
