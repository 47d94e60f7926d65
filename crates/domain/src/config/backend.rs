use crate::{InvalidAddressPolicy, KeyMapper, ZoneSet};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record store backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Prefix prepended to every store key.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    /// Zones answered from the store. Empty means every name.
    #[serde(default)]
    pub zones: Vec<String>,

    /// Zones whose misses are answered with REFUSED instead of NXDOMAIN.
    #[serde(default)]
    pub fallthrough: Vec<String>,

    /// etcd v3 gateway endpoints, tried in order. Empty selects the
    /// in-memory store.
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// JSON file loaded into the in-memory store at startup.
    #[serde(default)]
    pub seed_file: Option<String>,

    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    #[serde(default)]
    pub invalid_address: InvalidAddressPolicy,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            path_prefix: default_path_prefix(),
            zones: Vec::new(),
            fallthrough: Vec::new(),
            endpoints: Vec::new(),
            seed_file: None,
            fetch_timeout_ms: default_fetch_timeout_ms(),
            invalid_address: InvalidAddressPolicy::default(),
        }
    }
}

impl BackendConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn key_mapper(&self) -> KeyMapper {
        KeyMapper::new(self.path_prefix.clone())
    }

    /// Zones served here. No configured zone means the root zone.
    pub fn zone_set(&self) -> ZoneSet {
        if self.zones.is_empty() {
            ZoneSet::new(["."])
        } else {
            ZoneSet::new(&self.zones)
        }
    }

    pub fn fallthrough_set(&self) -> ZoneSet {
        ZoneSet::new(&self.fallthrough)
    }

    pub fn uses_etcd(&self) -> bool {
        !self.endpoints.is_empty()
    }
}

fn default_path_prefix() -> String {
    "/dns".to_string()
}

fn default_fetch_timeout_ms() -> u64 {
    3000
}
