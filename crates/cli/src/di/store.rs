use kvdns_application::ports::KvStore;
use kvdns_domain::BackendConfig;
use kvdns_infrastructure::store::{EtcdHttpStore, InMemoryKvStore};
use std::sync::Arc;
use tracing::{info, warn};

/// etcd when endpoints are configured, otherwise the in-memory store with the
/// optional seed file loaded.
pub fn build_store(backend: &BackendConfig) -> anyhow::Result<Arc<dyn KvStore>> {
    if backend.uses_etcd() {
        if backend.seed_file.is_some() {
            warn!("seed_file is ignored when etcd endpoints are configured");
        }
        let store = EtcdHttpStore::new(backend.endpoints.clone())?;
        info!(endpoints = ?store.endpoints(), "Using etcd record store");
        return Ok(Arc::new(store));
    }

    let store = InMemoryKvStore::new();
    if let Some(seed) = &backend.seed_file {
        store.load_seed_file(seed)?;
    }
    info!(keys = store.len(), "Using in-memory record store");
    Ok(Arc::new(store))
}
