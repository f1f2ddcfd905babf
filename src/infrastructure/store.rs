//! In-memory configuration store.

use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::ports::ConfigStore;

/// Publish-once key-value store.
///
/// Each key can be written exactly once; readers get the value as JSON or
/// deserialized into their own type.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    entries: HashMap<String, serde_json::Value>,
}

impl InMemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize the value stored under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> ConfigResult<Option<T>> {
        self.entries
            .get(key)
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(ConfigError::from)
    }

    /// Number of published keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been published yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn put(&mut self, key: &str, value: serde_json::Value) -> ConfigResult<()> {
        if self.entries.contains_key(key) {
            return Err(ConfigError::AlreadyPublished(key.to_string()));
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Feature, FeatureFlags};
    use serde_json::json;

    #[test]
    fn test_put_then_get() {
        let mut store = InMemoryConfigStore::new();
        assert!(store.is_empty());

        store.put("config", json!({"port": 443})).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("config"), Some(&json!({"port": 443})));
        assert_eq!(store.get("features"), None);
    }

    #[test]
    fn test_second_put_is_rejected() {
        let mut store = InMemoryConfigStore::new();
        store.put("config", json!(1)).unwrap();

        let result = store.put("config", json!(2));
        assert!(matches!(result, Err(ConfigError::AlreadyPublished(key)) if key == "config"));
        assert_eq!(store.get("config"), Some(&json!(1)));
    }

    #[test]
    fn test_load_typed_value() {
        let mut store = InMemoryConfigStore::new();
        store
            .put("features", json!({"error_collector": false}))
            .unwrap();

        let flags: FeatureFlags = store.load("features").unwrap().unwrap();
        assert!(!flags.is_enabled(Feature::ErrorCollector));

        let missing: Option<FeatureFlags> = store.load("missing").unwrap();
        assert!(missing.is_none());

        assert!(store.load::<u16>("features").is_err());
    }
}
