use async_trait::async_trait;
use bytes::Bytes;
use kvdns_domain::{StoreError, StoreKey};
use std::time::Duration;

/// One key/value pair returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    pub key: String,
    pub value: Bytes,
}

impl StoreEntry {
    pub fn new(key: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Read-only access to the hierarchical record store.
///
/// Implementations are built once at startup and shared across concurrent
/// resolutions, so `get` takes `&self` and must not mutate shared state.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch every entry stored under exactly `key`.
    ///
    /// `deadline` is the caller's time budget for this call. Implementations
    /// may pass it down to their transport; the caller enforces it regardless.
    async fn get(&self, key: &StoreKey, deadline: Duration) -> Result<Vec<StoreEntry>, StoreError>;
}
