#![allow(dead_code)]

use async_trait::async_trait;
use kvdns_application::ports::{KvStore, StoreEntry};
use kvdns_domain::{RecordEnvelope, StoreError, StoreKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct MockKvStore {
    entries: Arc<RwLock<HashMap<String, Vec<StoreEntry>>>>,
    error: Arc<RwLock<Option<StoreError>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<AtomicUsize>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl MockKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_raw(&self, key: &str, value: &[u8]) {
        self.entries
            .write()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push(StoreEntry::new(key, value.to_vec()));
    }

    pub fn put(&self, key: &str, envelope: &RecordEnvelope) {
        self.put_raw(key, &envelope.encode());
    }

    pub fn fail_with(&self, error: StoreError) {
        *self.error.write().unwrap() = Some(error);
    }

    pub fn delay_by(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_keys(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl KvStore for MockKvStore {
    async fn get(&self, key: &StoreKey, _deadline: Duration) -> Result<Vec<StoreEntry>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.write().unwrap().push(key.to_string());

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.error.read().unwrap().clone() {
            return Err(err);
        }

        Ok(self
            .entries
            .read()
            .unwrap()
            .get(key.as_str())
            .cloned()
            .unwrap_or_default())
    }
}
