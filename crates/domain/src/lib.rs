//! kvdns Domain Layer
pub mod answer;
pub mod config;
pub mod dns_query;
pub mod envelope;
pub mod errors;
pub mod record_type;
pub mod store_key;
pub mod zone;

pub use answer::{AnswerRecord, InvalidAddressPolicy, RecordData};
pub use config::{BackendConfig, CliOverrides, Config, ConfigError};
pub use dns_query::{DnsQuery, DNS_CLASS_IN};
pub use envelope::RecordEnvelope;
pub use errors::{DomainError, EnvelopeError, StoreError};
pub use record_type::{QueryType, RecordType};
pub use store_key::{KeyMapper, StoreKey};
pub use zone::ZoneSet;
