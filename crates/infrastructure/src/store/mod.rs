pub mod etcd;
pub mod memory;

pub use etcd::EtcdHttpStore;
pub use memory::InMemoryKvStore;
