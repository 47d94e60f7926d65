use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use kvdns_application::ports::{KvStore, StoreEntry};
use kvdns_domain::{ConfigError, RecordEnvelope, StoreError, StoreKey};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Process-local store. A key may hold several values, mirroring a store that
/// returns multiple entries for one lookup.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    entries: DashMap<String, Vec<Bytes>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedValue {
    One(RecordEnvelope),
    Many(Vec<RecordEnvelope>),
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    pub fn insert_envelope(&self, key: impl Into<String>, envelope: &RecordEnvelope) {
        self.insert(key, envelope.encode());
    }

    pub fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a JSON document of the form
    /// `{"/dns/com/example/www/TYPE_A": {"type": 1, "records": ["10.0.0.1"], "ttl": 300}}`.
    /// A key may also map to an array of envelopes.
    pub fn load_seed_str(&self, contents: &str) -> Result<usize, serde_json::Error> {
        let seed: HashMap<String, SeedValue> = serde_json::from_str(contents)?;
        let mut loaded = 0;
        for (key, value) in seed {
            match value {
                SeedValue::One(envelope) => {
                    self.insert_envelope(key, &envelope);
                    loaded += 1;
                }
                SeedValue::Many(envelopes) => {
                    for envelope in &envelopes {
                        self.insert_envelope(key.clone(), envelope);
                    }
                    loaded += envelopes.len();
                }
            }
        }
        Ok(loaded)
    }

    pub fn load_seed_file(&self, path: impl AsRef<Path>) -> Result<usize, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::SeedFile(path_str.clone(), e.to_string()))?;
        let loaded = self
            .load_seed_str(&contents)
            .map_err(|e| ConfigError::SeedFile(path_str.clone(), e.to_string()))?;

        info!(path = %path_str, entries = loaded, keys = self.len(), "Loaded seed records");
        Ok(loaded)
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &StoreKey, _deadline: Duration) -> Result<Vec<StoreEntry>, StoreError> {
        Ok(self
            .entries
            .get(key.as_str())
            .map(|values| {
                values
                    .iter()
                    .map(|value| StoreEntry::new(key.as_str(), value.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}
