mod kv_store;

pub use kv_store::{KvStore, StoreEntry};

// Re-export for convenience
pub use kvdns_domain::{StoreError, StoreKey};
