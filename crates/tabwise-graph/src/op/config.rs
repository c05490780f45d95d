//! External configuration visible to operation resolution.

use std::collections::HashMap;

/// String-keyed configuration values available when resolving operations.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    values: HashMap<String, serde_json::Value>,
}

impl PipelineConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a configuration value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Returns a configuration value.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Returns whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns a copy containing only the given keys.
    ///
    /// Keys absent from this configuration are simply absent from the
    /// restricted view as well.
    pub fn restricted(&self, keys: &[String]) -> Self {
        let values = keys
            .iter()
            .filter_map(|key| {
                self.values
                    .get(key)
                    .map(|value| (key.clone(), value.clone()))
            })
            .collect();
        Self { values }
    }
}
